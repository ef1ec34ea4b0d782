use legends_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    heroes::Hero,
    monsters::{
        Monster,
        MonsterData,
    },
};

/// Spawns a fresh group of monsters to fight the given party.
///
/// One monster is spawned per hero, each sampled uniformly from the prototypes and created at the
/// level of the strongest hero.
pub fn spawn_monsters(
    prototypes: &[MonsterData],
    heroes: &[Hero],
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Vec<Monster> {
    let Some(level) = heroes.iter().map(|hero| hero.level).max() else {
        return Vec::new();
    };
    (0..heroes.len())
        .filter_map(|_| rand_util::sample_slice(prng, prototypes))
        .map(|prototype| prototype.at_level(level))
        .collect()
}
