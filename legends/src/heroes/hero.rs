use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::{
        clamp_probability,
        display_name,
        round_to_tenth,
    },
    error::ActionError,
    heroes::{
        HeroClass,
        Stat,
    },
    items::{
        Inventory,
        Item,
        Potion,
        PotionAttribute,
    },
};

fn default_level() -> u32 {
    1
}

/// Data for creating a hero, as stored in a hero table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroData {
    pub name: String,
    pub class: HeroClass,
    #[serde(default = "default_level")]
    pub level: u32,
    pub mana: f64,
    pub strength: f64,
    pub agility: f64,
    pub dexterity: f64,
    pub gold: f64,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub inventory: Inventory,
}

/// The result of a hero being hit by a monster.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedHit {
    /// HP lost by the hero.
    pub damage: f64,
    /// Name of the armor that broke from the hit, if any.
    pub broken_armor: Option<String>,
}

/// A hero as saved between encounters, before its equipment is checked.
#[derive(Deserialize)]
struct HeroRecord {
    name: String,
    class: HeroClass,
    level: u32,
    experience: f64,
    hp: f64,
    mp: f64,
    strength: f64,
    agility: f64,
    dexterity: f64,
    gold: f64,
    #[serde(default)]
    inventory: Inventory,
    #[serde(default)]
    two_handed_grip: bool,
}

impl From<HeroRecord> for Hero {
    fn from(record: HeroRecord) -> Self {
        let mut hero = Self {
            name: record.name,
            class: record.class,
            level: record.level,
            experience: record.experience,
            hp: record.hp,
            mp: record.mp,
            strength: record.strength,
            agility: record.agility,
            dexterity: record.dexterity,
            gold: record.gold,
            inventory: record.inventory,
            two_handed_grip: record.two_handed_grip,
        };
        hero.normalize_equipment();
        hero
    }
}

/// A hero in the player's party.
///
/// Heroes outlive battles: every change made during a battle is visible to the caller afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HeroRecord")]
pub struct Hero {
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    pub experience: f64,
    pub hp: f64,
    pub mp: f64,
    pub strength: f64,
    pub agility: f64,
    pub dexterity: f64,
    pub gold: f64,
    pub inventory: Inventory,
    two_handed_grip: bool,
}

impl From<HeroData> for Hero {
    fn from(data: HeroData) -> Self {
        let mut hero = Self {
            name: data.name,
            class: data.class,
            level: data.level,
            experience: data.experience,
            hp: data.level as f64 * 100.0,
            mp: data.mana,
            strength: data.strength,
            agility: data.agility,
            dexterity: data.dexterity,
            gold: data.gold,
            inventory: data.inventory,
            two_handed_grip: false,
        };
        hero.normalize_equipment();
        hero
    }
}

impl Hero {
    /// Highest probability of dodging an attack.
    pub const MAX_DODGE_PROBABILITY: f64 = 0.5;

    /// Creates a new hero from data.
    pub fn new(data: HeroData) -> Self {
        Self::from(data)
    }

    /// The name of the hero for display.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// Has the hero fainted?
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }

    /// HP ceiling for regeneration at the hero's level.
    pub fn max_hp(&self) -> f64 {
        self.level as f64 * 100.0
    }

    /// Probability that the hero dodges a monster's attack.
    pub fn dodge_probability(&self) -> f64 {
        clamp_probability(self.agility * 0.001, Self::MAX_DODGE_PROBABILITY)
    }

    /// Damage of a physical attack, before the target's defense.
    pub fn attack_damage(&self) -> f64 {
        let weapon_damage = self
            .inventory
            .equipped_weapon()
            .map(|weapon| weapon.damage)
            .unwrap_or(0.0);
        (self.strength + weapon_damage) * 0.05
    }

    /// Is the equipped weapon held with both hands?
    pub fn two_handed_grip(&self) -> bool {
        self.two_handed_grip
    }

    /// Experience required for the next level.
    pub fn experience_to_level_up(&self) -> f64 {
        self.level as f64 * 10.0
    }

    /// Equips the weapon at the given inventory index.
    ///
    /// Two-handed weapons are always held with both hands, regardless of `two_handed`.
    pub fn equip_weapon(&mut self, index: usize, two_handed: bool) -> Result<(), ActionError> {
        let weapon = self
            .inventory
            .weapons
            .get(index)
            .ok_or(ActionError::NoSuchItem)?;
        if !weapon.is_usable() {
            return Err(ActionError::ItemBroken);
        }
        self.inventory.set_equipped_weapon(Some(index));
        self.set_two_handed_grip(two_handed);
        Ok(())
    }

    /// Equips the armor at the given inventory index.
    pub fn equip_armor(&mut self, index: usize) -> Result<(), ActionError> {
        let armor = self
            .inventory
            .armors
            .get(index)
            .ok_or(ActionError::NoSuchItem)?;
        if !armor.is_usable() {
            return Err(ActionError::ItemBroken);
        }
        self.inventory.set_equipped_armor(Some(index));
        Ok(())
    }

    /// Sets how the equipped weapon is held.
    ///
    /// Only meaningful for one-handed weapons. Without a weapon, the grip is always one-handed.
    pub fn set_two_handed_grip(&mut self, two_handed: bool) {
        self.two_handed_grip = match self.inventory.equipped_weapon() {
            None => false,
            Some(weapon) if weapon.is_two_handed() => true,
            Some(_) => two_handed,
        };
    }

    /// Drops equipment references that do not point at usable items.
    fn normalize_equipment(&mut self) {
        if !self
            .inventory
            .equipped_weapon()
            .is_some_and(|weapon| weapon.is_usable())
        {
            self.inventory.set_equipped_weapon(None);
        }
        if !self
            .inventory
            .equipped_armor()
            .is_some_and(|armor| armor.is_usable())
        {
            self.inventory.set_equipped_armor(None);
        }
        let grip = self.two_handed_grip;
        self.set_two_handed_grip(grip);
    }

    /// Consumes one use of the equipped weapon, unequipping it if it breaks.
    ///
    /// Returns the name of the weapon if it broke.
    pub fn wear_weapon(&mut self) -> Option<String> {
        let weapon = self.inventory.equipped_weapon_mut()?;
        weapon.consume_use();
        if weapon.is_usable() {
            return None;
        }
        let name = weapon.name.clone();
        self.inventory.set_equipped_weapon(None);
        self.two_handed_grip = false;
        Some(name)
    }

    /// Takes a hit from a monster.
    ///
    /// Armor absorbs a flat amount of damage and loses one use per hit, breaking when it runs out.
    pub fn receive_damage(&mut self, raw: f64) -> ReceivedHit {
        let mut damage = raw;
        let mut broken_armor = None;
        if let Some(armor) = self.inventory.equipped_armor_mut() {
            damage -= armor.reduction;
            armor.consume_use();
            if !armor.is_usable() {
                broken_armor = Some(armor.name.clone());
                self.inventory.set_equipped_armor(None);
            }
        }
        let damage = damage.max(0.0);
        let before = self.hp;
        self.hp = (self.hp - damage).max(0.0);
        ReceivedHit {
            damage: before - self.hp,
            broken_armor,
        }
    }

    /// Applies the effect of a potion to the hero.
    ///
    /// Does not consume the potion.
    pub fn apply_potion(&mut self, potion: &Potion) {
        for attribute in potion.attributes.iter() {
            let stat = match attribute {
                PotionAttribute::Health => &mut self.hp,
                PotionAttribute::Mana => &mut self.mp,
                PotionAttribute::Strength => &mut self.strength,
                PotionAttribute::Agility => &mut self.agility,
                PotionAttribute::Dexterity => &mut self.dexterity,
            };
            *stat += potion.amount;
        }
    }

    /// Regenerates HP and MP at the end of a round.
    ///
    /// HP is capped at the hero's maximum, MP is not.
    pub fn regenerate(&mut self) {
        if self.is_fainted() {
            return;
        }
        self.hp = round_to_tenth(self.hp * 1.1).min(self.max_hp());
        self.mp = round_to_tenth(self.mp * 1.1);
    }

    /// Revives a fainted hero at half of the maximum HP and half of the current MP.
    pub fn revive(&mut self) {
        self.hp = self.max_hp() / 2.0;
        self.mp /= 2.0;
    }

    pub fn gain_gold(&mut self, amount: f64) {
        self.gold += amount;
    }

    /// Spends gold, if the hero has enough.
    ///
    /// Returns `false` without changing anything if the hero cannot afford it.
    pub fn spend_gold(&mut self, amount: f64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    /// Gains experience, leveling up as many times as the experience allows.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: f64) -> u32 {
        self.experience += amount;
        let mut levels = 0;
        while self.experience >= self.experience_to_level_up() {
            self.experience -= self.experience_to_level_up();
            self.level_up();
            levels += 1;
        }
        levels
    }

    fn stat_mut(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Agility => &mut self.agility,
            Stat::Dexterity => &mut self.dexterity,
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.hp = self.max_hp();
        self.mp *= 1.1;
        for stat in [Stat::Strength, Stat::Agility, Stat::Dexterity] {
            *self.stat_mut(stat) *= 1.05;
        }
        for stat in self.class.favored_stats() {
            *self.stat_mut(stat) *= 1.05;
        }
        log::debug!("{} reached level {}", self.name, self.level);
    }
}
