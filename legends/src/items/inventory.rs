use serde::{
    Deserialize,
    Serialize,
};

use crate::items::{
    Armor,
    Potion,
    Spell,
    Weapon,
};

/// Adjusts an equipped index after an item is removed from the same list.
fn adjust_equipped(equipped: &mut Option<usize>, removed: usize) {
    *equipped = match *equipped {
        Some(index) if index == removed => None,
        Some(index) if index > removed => Some(index - 1),
        other => other,
    };
}

/// Items owned by a single hero.
///
/// Equipped weapon and armor are recorded by index, so an item is never owned twice.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub armors: Vec<Armor>,
    #[serde(default)]
    pub potions: Vec<Potion>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    equipped_weapon: Option<usize>,
    #[serde(default)]
    equipped_armor: Option<usize>,
}

impl Inventory {
    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn add_armor(&mut self, armor: Armor) {
        self.armors.push(armor);
    }

    pub fn add_potion(&mut self, potion: Potion) {
        self.potions.push(potion);
    }

    pub fn add_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
    }

    /// Removes a weapon, unequipping it if needed.
    pub fn remove_weapon(&mut self, index: usize) -> Option<Weapon> {
        if index >= self.weapons.len() {
            return None;
        }
        adjust_equipped(&mut self.equipped_weapon, index);
        Some(self.weapons.remove(index))
    }

    /// Removes an armor, unequipping it if needed.
    pub fn remove_armor(&mut self, index: usize) -> Option<Armor> {
        if index >= self.armors.len() {
            return None;
        }
        adjust_equipped(&mut self.equipped_armor, index);
        Some(self.armors.remove(index))
    }

    pub fn remove_potion(&mut self, index: usize) -> Option<Potion> {
        (index < self.potions.len()).then(|| self.potions.remove(index))
    }

    pub fn remove_spell(&mut self, index: usize) -> Option<Spell> {
        (index < self.spells.len()).then(|| self.spells.remove(index))
    }

    /// Index of the equipped weapon.
    pub fn equipped_weapon_index(&self) -> Option<usize> {
        self.equipped_weapon
    }

    /// Index of the equipped armor.
    pub fn equipped_armor_index(&self) -> Option<usize> {
        self.equipped_armor
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.equipped_weapon?)
    }

    pub fn equipped_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.equipped_weapon?)
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.armors.get(self.equipped_armor?)
    }

    pub fn equipped_armor_mut(&mut self) -> Option<&mut Armor> {
        self.armors.get_mut(self.equipped_armor?)
    }

    pub(crate) fn set_equipped_weapon(&mut self, index: Option<usize>) {
        self.equipped_weapon = index.filter(|index| *index < self.weapons.len());
    }

    pub(crate) fn set_equipped_armor(&mut self, index: Option<usize>) {
        self.equipped_armor = index.filter(|index| *index < self.armors.len());
    }
}
