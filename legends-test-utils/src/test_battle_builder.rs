use anyhow::Result;
use legends::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    Difficulty,
    Hero,
    Monster,
    TargetingPolicyType,
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    monsters: Vec<Monster>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions::default(),
            monsters: Vec::new(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] for the given party.
    pub fn build<'b>(mut self, heroes: &'b mut [Hero]) -> Result<Battle<'b>> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        Battle::new(heroes, self.monsters, self.options, self.engine_options)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_event_logs(mut self, log_events: bool) -> Self {
        self.engine_options.log_events = log_events;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.options.difficulty = difficulty;
        self
    }

    pub fn with_targeting(mut self, targeting: TargetingPolicyType) -> Self {
        self.options.targeting = Some(targeting);
        self
    }

    pub fn with_flee_chance(mut self, flee_chance: f64) -> Self {
        self.options.flee_chance = flee_chance;
        self
    }

    pub fn with_flee_gold_penalty(mut self, flee_gold_penalty: f64) -> Self {
        self.options.flee_gold_penalty = flee_gold_penalty;
        self
    }

    pub fn add_monster(mut self, monster: Monster) -> Self {
        self.monsters.push(monster);
        self
    }

    pub fn add_monsters<I>(mut self, monsters: I) -> Self
    where
        I: IntoIterator<Item = Monster>,
    {
        self.monsters.extend(monsters);
        self
    }
}
