use crate::items::Durability;

/// The category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Spell,
}

impl ItemKind {
    /// The durability an item of this kind starts with, and returns to when restored.
    pub fn default_durability(&self) -> Durability {
        match self {
            Self::Weapon => Durability::Remaining(15),
            Self::Armor => Durability::Remaining(25),
            Self::Potion => Durability::Remaining(3),
            Self::Spell => Durability::Remaining(1),
        }
    }
}

/// Common behavior of all items owned by a hero.
pub trait Item {
    /// The kind of item.
    fn kind(&self) -> ItemKind;

    /// The stored name of the item.
    fn name(&self) -> &str;

    /// The price of the item at the market.
    fn cost(&self) -> f64;

    /// The minimum hero level for buying the item.
    fn required_level(&self) -> u32;

    /// The remaining uses of the item.
    fn durability(&self) -> Durability;

    /// Mutable access to the remaining uses of the item.
    fn durability_mut(&mut self) -> &mut Durability;

    /// Can the item still be used?
    fn is_usable(&self) -> bool {
        self.durability().is_usable()
    }

    /// Consumes a single use of the item.
    fn consume_use(&mut self) {
        self.durability_mut().consume();
    }

    /// Restores the item to its default durability.
    fn restore(&mut self) {
        *self.durability_mut() = self.kind().default_durability();
    }
}

/// Implements [`Item`] for a struct with `name`, `cost`, `required_level`, and `uses` fields.
macro_rules! impl_item {
    ($ty:ty, $kind:expr) => {
        impl $crate::items::Item for $ty {
            fn kind(&self) -> $crate::items::ItemKind {
                $kind
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn cost(&self) -> f64 {
                self.cost
            }

            fn required_level(&self) -> u32 {
                self.required_level
            }

            fn durability(&self) -> $crate::items::Durability {
                self.uses
            }

            fn durability_mut(&mut self) -> &mut $crate::items::Durability {
                &mut self.uses
            }
        }
    };
}

pub(crate) use impl_item;
