use anyhow::Result;
use legends_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::TargetingPolicyType,
    config::Difficulty,
    error::{
        ValidationError,
        WrapError,
    },
};

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_flee_chance() -> f64 {
    0.6
}

fn default_flee_gold_penalty() -> f64 {
    0.1
}

/// Options that change how the battle engine itself behaves, which is not specific to any
/// individual battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Should every battle event also be written to the diagnostic log?
    ///
    /// Events are always recorded in the battle's event log. This option mirrors them to the
    /// `log` facade at the debug level.
    #[serde(default)]
    pub log_events: bool,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            log_events: false,
        }
    }
}

/// Options for a single battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,

    /// The difficulty of the game, which selects the monsters' targeting policy.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Targeting policy for monsters, overriding the one selected by the difficulty.
    #[serde(default)]
    pub targeting: Option<TargetingPolicyType>,

    /// Probability that a flee attempt succeeds.
    #[serde(default = "default_flee_chance")]
    pub flee_chance: f64,

    /// Fraction of current gold lost by every conscious hero when the party flees.
    #[serde(default = "default_flee_gold_penalty")]
    pub flee_gold_penalty: f64,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::default(),
            targeting: None,
            flee_chance: default_flee_chance(),
            flee_gold_penalty: default_flee_gold_penalty(),
        }
    }
}

impl BattleOptions {
    /// The targeting policy monsters use in the battle.
    pub fn targeting_policy_type(&self) -> TargetingPolicyType {
        self.targeting
            .unwrap_or_else(|| self.difficulty.targeting())
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<()> {
        let mut error = ValidationError::default();
        if !(0.0..=1.0).contains(&self.flee_chance) {
            error.add_problem(format!(
                "flee chance must be between 0 and 1, got {}",
                self.flee_chance
            ));
        }
        if !(0.0..=1.0).contains(&self.flee_gold_penalty) {
            error.add_problem(format!(
                "flee gold penalty must be between 0 and 1, got {}",
                self.flee_gold_penalty
            ));
        }
        if !error.is_empty() {
            return Err(error.wrap_error_with_message("invalid battle options"));
        }
        Ok(())
    }
}
