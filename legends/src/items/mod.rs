mod armor;
mod durability;
mod inventory;
mod item;
mod potion;
mod spell;
mod weapon;

pub use armor::Armor;
pub use durability::Durability;
pub use inventory::Inventory;
pub(crate) use item::impl_item;
pub use item::{
    Item,
    ItemKind,
};
pub use potion::{
    Potion,
    PotionAttribute,
    PotionAttributes,
};
pub use spell::{
    Spell,
    SpellElement,
};
pub use weapon::Weapon;
