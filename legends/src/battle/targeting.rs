use legends_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::heroes::Hero;

/// Strategy for choosing which hero a monster attacks.
pub trait TargetingPolicy {
    /// Selects the index of the hero to attack.
    ///
    /// Only heroes that have not fainted are eligible. Returns [`None`] if no hero is eligible.
    fn select_target(
        &self,
        heroes: &[Hero],
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Option<usize>;
}

/// Attacks a uniformly random conscious hero.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl TargetingPolicy for RandomTargeting {
    fn select_target(
        &self,
        heroes: &[Hero],
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Option<usize> {
        let eligible = heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| !hero.is_fainted())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        rand_util::sample_slice(prng, &eligible).copied()
    }
}

/// Attacks the conscious hero with the lowest current HP.
///
/// Ties are broken by a coin flip for every tied hero after the first.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestHpTargeting;

impl TargetingPolicy for LowestHpTargeting {
    fn select_target(
        &self,
        heroes: &[Hero],
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, hero) in heroes.iter().enumerate() {
            if hero.is_fainted() {
                continue;
            }
            best = match best {
                None => Some((i, hero.hp)),
                Some((_, hp)) if hero.hp < hp => Some((i, hero.hp)),
                Some((_, hp)) if hero.hp == hp && rand_util::chance(prng, 1, 2) => {
                    Some((i, hero.hp))
                }
                best => best,
            };
        }
        best.map(|(i, _)| i)
    }
}

/// A built-in targeting policy, for configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TargetingPolicyType {
    #[string = "Random"]
    Random,
    #[string = "LowestHp"]
    LowestHp,
}

impl TargetingPolicyType {
    /// Creates the policy.
    pub fn policy(&self) -> Box<dyn TargetingPolicy> {
        match self {
            Self::Random => Box::new(RandomTargeting),
            Self::LowestHp => Box::new(LowestHpTargeting),
        }
    }
}
