use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    items::{
        Durability,
        ItemKind,
        impl_item,
    },
    monsters::Monster,
};

/// The element of a spell, which determines the lasting effect on a monster it hits.
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
pub enum SpellElement {
    /// Reduces the monster's defense by 10%.
    #[string = "Fire"]
    Fire,
    /// Reduces the monster's base damage by 10%.
    #[string = "Ice"]
    Ice,
    /// Reduces the monster's dodge chance by 10%.
    #[string = "Lightning"]
    Lightning,
}

impl SpellElement {
    /// Applies the lasting effect of the element to the monster.
    pub fn apply_debuff(&self, monster: &mut Monster) {
        match self {
            Self::Fire => monster.defense *= 0.9,
            Self::Ice => monster.base_damage *= 0.9,
            Self::Lightning => monster.dodge_chance *= 0.9,
        }
    }
}

fn default_durability() -> Durability {
    ItemKind::Spell.default_durability()
}

/// A spell, which deals magic damage to a monster and weakens it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub cost: f64,
    pub required_level: u32,
    /// Damage before the caster's dexterity is applied.
    pub damage: f64,
    pub mana_cost: f64,
    pub element: SpellElement,
    #[serde(default = "default_durability")]
    pub uses: Durability,
}

impl Spell {
    /// Damage dealt by the spell when cast by a hero with the given dexterity.
    pub fn damage_for(&self, dexterity: f64) -> f64 {
        self.damage + (dexterity / 10000.0) * self.damage
    }
}

impl_item!(Spell, ItemKind::Spell);
