use serde::{
    Deserialize,
    Serialize,
};

use crate::items::{
    Durability,
    ItemKind,
    impl_item,
};

fn default_hands() -> u8 {
    1
}

fn default_durability() -> Durability {
    ItemKind::Weapon.default_durability()
}

/// A weapon, which adds to a hero's physical attack damage while equipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub cost: f64,
    pub required_level: u32,
    /// Damage added to the wielder's strength when attacking.
    pub damage: f64,
    /// Number of hands required to wield the weapon (1 or 2).
    #[serde(default = "default_hands")]
    pub hands: u8,
    #[serde(default = "default_durability")]
    pub uses: Durability,
}

impl Weapon {
    /// Does the weapon require both hands?
    pub fn is_two_handed(&self) -> bool {
        self.hands >= 2
    }
}

impl_item!(Weapon, ItemKind::Weapon);
