use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::{
        clamp_probability,
        display_name,
    },
    monsters::MonsterKind,
};

/// Data for a monster prototype, as stored in a monster table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterData {
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub base_damage: f64,
    pub defense: f64,
    /// Dodge chance as a percentage in `[0, 100]`.
    pub dodge_chance: f64,
}

impl MonsterData {
    /// Creates a fresh monster from this prototype at its own level.
    pub fn spawn(&self) -> Monster {
        self.at_level(self.level)
    }

    /// Creates a fresh monster from this prototype at the given level.
    ///
    /// The monster's kind bonus is applied exactly once, here.
    pub fn at_level(&self, level: u32) -> Monster {
        let mut monster = Monster {
            name: self.name.clone(),
            kind: self.kind,
            level,
            hp: level as f64 * 100.0,
            base_damage: self.base_damage,
            defense: self.defense,
            dodge_chance: self.dodge_chance,
        };
        match self.kind {
            MonsterKind::Dragon => monster.base_damage *= 1.1,
            MonsterKind::Exoskeleton => monster.defense *= 1.1,
            MonsterKind::Spirit => monster.dodge_chance *= 1.1,
        }
        monster
    }
}

/// A monster in a single encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub hp: f64,
    pub base_damage: f64,
    pub defense: f64,
    /// Dodge chance as a percentage in `[0, 100]`.
    pub dodge_chance: f64,
}

impl Monster {
    /// Highest fraction of incoming damage that defense can absorb.
    pub const MAX_DAMAGE_REDUCTION: f64 = 0.8;
    /// Highest probability of dodging an attack.
    pub const MAX_DODGE_PROBABILITY: f64 = 0.5;

    /// The name of the monster for display.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// Is the monster dead?
    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Probability that the monster dodges an attack.
    pub fn dodge_probability(&self) -> f64 {
        clamp_probability(
            self.dodge_chance * 0.01 * 0.5,
            Self::MAX_DODGE_PROBABILITY,
        )
    }

    /// Fraction of incoming damage absorbed by the monster's defense.
    pub fn damage_reduction(&self) -> f64 {
        let factor = self.defense / (self.defense + 3000.0);
        if factor.is_nan() {
            return 0.0;
        }
        factor.clamp(0.0, Self::MAX_DAMAGE_REDUCTION)
    }

    /// Applies incoming damage, returning the amount of HP actually lost.
    ///
    /// Any positive amount of damage removes at least one point of HP.
    pub fn take_damage(&mut self, damage: f64) -> f64 {
        let mut reduced = damage * (1.0 - self.damage_reduction());
        if reduced < 1.0 && damage > 0.0 {
            reduced = 1.0;
        }
        let reduced = reduced.max(0.0);
        let before = self.hp;
        self.hp = (self.hp - reduced).max(0.0);
        before - self.hp
    }
}
