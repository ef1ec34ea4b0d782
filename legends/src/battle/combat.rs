use legends_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::TargetingPolicy,
    error::ActionError,
    heroes::Hero,
    items::{
        Item,
        PotionAttributes,
        Spell,
    },
    monsters::Monster,
};

/// The result of a hero's physical attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// HP lost by the monster.
    pub damage: f64,
    pub dodged: bool,
    /// Name of the weapon that broke during the attack, if any.
    pub broken_weapon: Option<String>,
    /// Did the attack defeat the monster?
    pub defeated: bool,
}

/// The result of a hero casting a spell.
#[derive(Debug, Clone, PartialEq)]
pub struct CastOutcome {
    pub spell: String,
    /// HP lost by the monster.
    pub damage: f64,
    pub dodged: bool,
    /// Was the last use of the spell consumed, removing it from the inventory?
    pub exhausted: bool,
    pub defeated: bool,
}

/// The result of a hero drinking a potion.
#[derive(Debug, Clone, PartialEq)]
pub struct PotionOutcome {
    pub potion: String,
    pub amount: f64,
    pub attributes: PotionAttributes,
    /// Was the last use of the potion consumed, removing it from the inventory?
    pub exhausted: bool,
}

/// The result of a monster's attack.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterAttackOutcome {
    /// Index of the attacked hero.
    pub hero: usize,
    /// HP lost by the hero.
    pub damage: f64,
    pub dodged: bool,
    /// Name of the armor that broke from the hit, if any.
    pub broken_armor: Option<String>,
    /// Did the attack make the hero faint?
    pub fainted: bool,
}

fn check_combatants(hero: &Hero, monster: &Monster) -> Result<(), ActionError> {
    if hero.is_fainted() {
        return Err(ActionError::Fainted);
    }
    if monster.is_dead() {
        return Err(ActionError::TargetDefeated);
    }
    Ok(())
}

/// Resolves a physical attack by a hero against a monster.
///
/// The equipped weapon loses a use whether or not the attack lands.
pub fn hero_attack(
    hero: &mut Hero,
    monster: &mut Monster,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<AttackOutcome, ActionError> {
    check_combatants(hero, monster)?;
    let raw = hero.attack_damage();
    let dodged = rand_util::roll(prng, monster.dodge_probability());
    let damage = if dodged {
        0.0
    } else {
        monster.take_damage(raw)
    };
    log::trace!(
        "{} attacks {} (raw {raw}, dodged {dodged})",
        hero.name,
        monster.name
    );
    let broken_weapon = hero.wear_weapon();
    Ok(AttackOutcome {
        damage,
        dodged,
        broken_weapon,
        defeated: monster.is_dead(),
    })
}

/// Checks that the hero is able to cast the spell at the given inventory index.
///
/// A spell with no uses left crumbles: it is removed from the inventory.
pub fn check_cast(hero: &mut Hero, spell: usize) -> Result<(), ActionError> {
    if hero.is_fainted() {
        return Err(ActionError::Fainted);
    }
    let spell_data = hero
        .inventory
        .spells
        .get(spell)
        .ok_or(ActionError::NoSuchItem)?;
    if !spell_data.is_usable() {
        hero.inventory.remove_spell(spell);
        return Err(ActionError::ItemBroken);
    }
    if hero.mp < spell_data.mana_cost {
        return Err(ActionError::NotEnoughMana);
    }
    Ok(())
}

/// Resolves a spell cast by a hero against a monster.
///
/// A hero without enough mana cannot cast, and nothing is spent. Otherwise, mana and a use of the
/// spell are spent whether or not the spell lands. A spell that lands deals damage, then weakens
/// the monster if it survives.
pub fn hero_cast(
    hero: &mut Hero,
    spell: usize,
    monster: &mut Monster,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<CastOutcome, ActionError> {
    check_combatants(hero, monster)?;
    check_cast(hero, spell)?;
    let spell_data = hero
        .inventory
        .spells
        .get(spell)
        .ok_or(ActionError::NoSuchItem)?;
    let name = spell_data.name.clone();
    let mana_cost = spell_data.mana_cost;
    let element = spell_data.element;
    let raw = spell_data.damage_for(hero.dexterity);

    let dodged = rand_util::roll(prng, monster.dodge_probability());
    let damage = if dodged {
        0.0
    } else {
        let damage = monster.take_damage(raw);
        if !monster.is_dead() {
            element.apply_debuff(monster);
        }
        damage
    };
    hero.mp -= mana_cost;

    let mut exhausted = false;
    if let Some(spell_data) = hero.inventory.spells.get_mut(spell) {
        spell_data.consume_use();
        if !spell_data.is_usable() {
            hero.inventory.remove_spell(spell);
            exhausted = true;
        }
    }
    Ok(CastOutcome {
        spell: name,
        damage,
        dodged,
        exhausted,
        defeated: monster.is_dead(),
    })
}

/// Drinks a potion from the hero's inventory.
///
/// A potion with no uses left crumbles: it is removed and nothing happens.
pub fn drink_potion(hero: &mut Hero, potion: usize) -> Result<PotionOutcome, ActionError> {
    if hero.is_fainted() {
        return Err(ActionError::Fainted);
    }
    let potion_data = hero
        .inventory
        .potions
        .get(potion)
        .ok_or(ActionError::NoSuchItem)?;
    if !potion_data.is_usable() {
        hero.inventory.remove_potion(potion);
        return Err(ActionError::ItemBroken);
    }
    let potion_data = potion_data.clone();
    hero.apply_potion(&potion_data);

    let mut exhausted = false;
    if let Some(potion_data) = hero.inventory.potions.get_mut(potion) {
        potion_data.consume_use();
        if !potion_data.is_usable() {
            hero.inventory.remove_potion(potion);
            exhausted = true;
        }
    }
    Ok(PotionOutcome {
        potion: potion_data.name,
        amount: potion_data.amount,
        attributes: potion_data.attributes,
        exhausted,
    })
}

/// Resolves an attack by a monster against the party.
///
/// Returns [`None`] if no hero can be targeted.
pub fn monster_attack(
    monster: &Monster,
    heroes: &mut [Hero],
    targeting: &dyn TargetingPolicy,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Option<MonsterAttackOutcome> {
    if monster.is_dead() {
        return None;
    }
    let target = targeting.select_target(heroes, prng)?;
    let hero = heroes.get_mut(target)?;
    let dodged = rand_util::roll(prng, hero.dodge_probability());
    let (damage, broken_armor) = if dodged {
        (0.0, None)
    } else {
        let hit = hero.receive_damage(monster.base_damage);
        (hit.damage, hit.broken_armor)
    };
    log::trace!(
        "{} attacks {} (raw {}, dodged {dodged})",
        monster.name,
        hero.name,
        monster.base_damage
    );
    Some(MonsterAttackOutcome {
        hero: target,
        damage,
        dodged,
        broken_armor,
        fainted: hero.is_fainted(),
    })
}
