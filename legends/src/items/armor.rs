use serde::{
    Deserialize,
    Serialize,
};

use crate::items::{
    Durability,
    ItemKind,
    impl_item,
};

fn default_durability() -> Durability {
    ItemKind::Armor.default_durability()
}

/// Armor, which reduces every hit a hero takes by a flat amount while equipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub cost: f64,
    pub required_level: u32,
    /// Flat damage subtracted from every hit.
    pub reduction: f64,
    #[serde(default = "default_durability")]
    pub uses: Durability,
}

impl_item!(Armor, ItemKind::Armor);
