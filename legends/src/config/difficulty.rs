use legends_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::TargetingPolicyType;

/// The difficulty of the game.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Difficulty {
    #[string = "Easy"]
    Easy,
    #[default]
    #[string = "Normal"]
    Normal,
    #[string = "Hard"]
    Hard,
}

impl Difficulty {
    /// The targeting policy monsters use at this difficulty.
    pub fn targeting(&self) -> TargetingPolicyType {
        match self {
            Self::Easy | Self::Normal => TargetingPolicyType::Random,
            Self::Hard => TargetingPolicyType::LowestHp,
        }
    }

    /// How often moving onto a common tile starts a battle.
    pub fn encounter_rate(&self) -> EncounterRate {
        match self {
            Self::Easy => EncounterRate::new(0.15),
            Self::Normal => EncounterRate::new(0.30),
            Self::Hard => EncounterRate::new(0.55),
        }
    }
}

/// Probability that a battle starts on a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterRate(f64);

impl EncounterRate {
    pub fn new(chance: f64) -> Self {
        Self(chance)
    }

    pub fn chance(&self) -> f64 {
        self.0
    }

    /// Rolls for an encounter.
    pub fn should_trigger(&self, prng: &mut dyn PseudoRandomNumberGenerator) -> bool {
        rand_util::roll(prng, self.0)
    }
}
