#![no_std]

extern crate alloc;

use alloc::{
    collections::VecDeque,
    format,
    string::{
        String,
        ToString,
    },
    vec::Vec,
};
use core::{
    fmt::Display,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid choice: {0}")]
pub struct InvalidChoiceError(String);

fn split_args(s: &str) -> VecDeque<&str> {
    s.split(',')
        .map(|str| str.trim())
        .filter(|str| !str.is_empty())
        .collect()
}

/// A choice to attack a monster with the equipped weapon (or bare hands).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttackChoice {
    /// The index of the target among living monsters.
    ///
    /// If not specified, the target is requested separately.
    pub target: Option<usize>,
}

impl Display for AttackChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(target) = self.target {
            write!(f, "{target}")?;
        }
        Ok(())
    }
}

impl FromStr for AttackChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = (!s.is_empty())
            .then(|| s.parse::<usize>())
            .transpose()
            .context("invalid attack target")?;
        Ok(Self { target })
    }
}

/// A choice to cast a spell from the inventory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CastChoice {
    /// The index of the spell in the inventory.
    pub spell: usize,
    /// The index of the target among living monsters.
    ///
    /// If not specified, the target is requested separately.
    pub target: Option<usize>,
}

impl Display for CastChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.spell)?;
        if let Some(target) = self.target {
            write!(f, ",{target}")?;
        }
        Ok(())
    }
}

impl FromStr for CastChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = split_args(s);
        let spell = args
            .pop_front()
            .context("missing spell slot")?
            .parse()
            .context("invalid spell slot")?;
        let target = args
            .pop_front()
            .map(|target| target.parse())
            .transpose()
            .context("invalid spell target")?;
        if let Some(arg) = args.pop_front() {
            return Err(Error::msg(format!("unexpected argument in cast choice: {arg}")));
        }
        Ok(Self { spell, target })
    }
}

/// A choice to drink a potion from the inventory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PotionChoice {
    /// The index of the potion in the inventory.
    pub potion: usize,
}

impl Display for PotionChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.potion)
    }
}

impl FromStr for PotionChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let potion = s.trim().parse().context("invalid potion slot")?;
        Ok(Self { potion })
    }
}

/// The equipment slot targeted by an [`EquipChoice`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    #[default]
    Weapon,
    Armor,
}

impl Display for EquipSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
        }
    }
}

impl FromStr for EquipSlot {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weapon" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            _ => Err(Error::msg(format!("invalid equipment slot: {s}"))),
        }
    }
}

/// A choice to change equipment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EquipChoice {
    /// The slot to change.
    pub slot: EquipSlot,
    /// The index of the item in the inventory list for the slot.
    pub item: usize,
    /// Grip a one-handed weapon with both hands?
    ///
    /// Ignored for armor. Two-handed weapons are always gripped with both hands.
    pub two_handed: bool,
}

impl Display for EquipChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.slot, self.item)?;
        if self.two_handed {
            write!(f, ",twohanded")?;
        }
        Ok(())
    }
}

impl FromStr for EquipChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slot, data) = match s.split_once(' ') {
            Some((slot, data)) => (slot, data),
            None => (s, ""),
        };
        let slot = EquipSlot::from_str(slot.trim())?;
        let mut args = split_args(data);
        let item = args
            .pop_front()
            .context("missing item slot")?
            .parse()
            .context("invalid item slot")?;
        let mut choice = Self {
            slot,
            item,
            two_handed: false,
        };
        while let Some(arg) = args.pop_front() {
            match arg {
                "twohanded" => {
                    choice.two_handed = true;
                }
                _ => {
                    return Err(Error::msg(format!("invalid option in equip choice: {arg}")));
                }
            }
        }
        Ok(choice)
    }
}

/// A choice, which controls how a hero acts when asked for an action during the heroes' turn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Attack a monster.
    Attack(AttackChoice),
    /// Cast a spell on a monster.
    Cast(CastChoice),
    /// Drink a potion.
    Potion(PotionChoice),
    /// Change equipment. Does not end the hero's turn.
    Equip(EquipChoice),
    /// Look at the battle. Does not end the hero's turn.
    #[default]
    Inspect,
    /// Attempt to flee from the battle with the whole party.
    Flee,
}

impl Choice {
    /// Does the choice end the hero's turn when it is carried out?
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, Self::Equip(_) | Self::Inspect)
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Attack(choice) => match choice.target {
                Some(_) => write!(f, "attack {choice}"),
                None => write!(f, "attack"),
            },
            Self::Cast(choice) => write!(f, "cast {choice}"),
            Self::Potion(choice) => write!(f, "potion {choice}"),
            Self::Equip(choice) => write!(f, "equip {choice}"),
            Self::Inspect => write!(f, "inspect"),
            Self::Flee => write!(f, "flee"),
        }
    }
}

impl FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (choice, data) = match s.split_once(' ') {
            Some((choice, data)) => (choice, data.trim()),
            None => (s, ""),
        };
        match choice {
            "attack" => Ok(Self::Attack(AttackChoice::from_str(data)?)),
            "cast" => Ok(Self::Cast(CastChoice::from_str(data)?)),
            "potion" => Ok(Self::Potion(PotionChoice::from_str(data)?)),
            "equip" => Ok(Self::Equip(EquipChoice::from_str(data)?)),
            "inspect" => Ok(Self::Inspect),
            "flee" | "run" => Ok(Self::Flee),
            _ => Err(Error::new(InvalidChoiceError(choice.to_string()))),
        }
    }
}

/// Serializes multiple [`Choice`]s to a string.
pub fn choices_to_string<I>(choices: I) -> String
where
    I: IntoIterator<Item = Choice>,
{
    choices
        .into_iter()
        .map(|choice| choice.to_string())
        .join(";")
}

/// Deserializes multiple [`Choice`]s from a string.
pub fn choices_from_string<S>(choices: S) -> Result<Vec<Choice>>
where
    S: AsRef<str>,
{
    choices
        .as_ref()
        .split(";")
        .map(|str| str.trim())
        .filter(|str| !str.is_empty())
        .map(|str| Choice::from_str(str))
        .collect()
}

#[cfg(test)]
mod legends_choice_test {
    use alloc::{
        format,
        string::ToString,
        vec::Vec,
    };
    use core::str::FromStr;

    use crate::{
        AttackChoice,
        CastChoice,
        Choice,
        EquipChoice,
        EquipSlot,
        PotionChoice,
        choices_from_string,
        choices_to_string,
    };

    #[test]
    fn serializes_to_string() {
        assert_eq!(
            Choice::Attack(AttackChoice { target: None }).to_string(),
            "attack"
        );
        assert_eq!(
            Choice::Attack(AttackChoice { target: Some(2) }).to_string(),
            "attack 2"
        );
        assert_eq!(
            Choice::Cast(CastChoice {
                spell: 0,
                target: None,
            })
            .to_string(),
            "cast 0"
        );
        assert_eq!(
            Choice::Cast(CastChoice {
                spell: 1,
                target: Some(0),
            })
            .to_string(),
            "cast 1,0"
        );
        assert_eq!(
            Choice::Potion(PotionChoice { potion: 3 }).to_string(),
            "potion 3"
        );
        assert_eq!(
            Choice::Equip(EquipChoice {
                slot: EquipSlot::Weapon,
                item: 1,
                two_handed: true,
            })
            .to_string(),
            "equip weapon 1,twohanded"
        );
        assert_eq!(
            Choice::Equip(EquipChoice {
                slot: EquipSlot::Armor,
                item: 0,
                two_handed: false,
            })
            .to_string(),
            "equip armor 0"
        );
        assert_eq!(Choice::Inspect.to_string(), "inspect");
        assert_eq!(Choice::Flee.to_string(), "flee");
    }

    #[test]
    fn deserializes_from_string() {
        assert_matches::assert_matches!(
            Choice::from_str("attack"),
            Ok(Choice::Attack(AttackChoice { target: None }))
        );
        assert_matches::assert_matches!(
            Choice::from_str("attack 1"),
            Ok(Choice::Attack(AttackChoice { target: Some(1) }))
        );
        assert_matches::assert_matches!(
            Choice::from_str("cast 2,1"),
            Ok(Choice::Cast(choice)) => {
                assert_eq!(choice, CastChoice {
                    spell: 2,
                    target: Some(1),
                });
            }
        );
        assert_matches::assert_matches!(
            Choice::from_str("potion 0"),
            Ok(Choice::Potion(PotionChoice { potion: 0 }))
        );
        assert_matches::assert_matches!(
            Choice::from_str("equip weapon 3, twohanded"),
            Ok(Choice::Equip(choice)) => {
                assert_eq!(choice, EquipChoice {
                    slot: EquipSlot::Weapon,
                    item: 3,
                    two_handed: true,
                });
            }
        );
        assert_matches::assert_matches!(Choice::from_str("inspect"), Ok(Choice::Inspect));
        assert_matches::assert_matches!(Choice::from_str("flee"), Ok(Choice::Flee));
        assert_matches::assert_matches!(Choice::from_str("run"), Ok(Choice::Flee));
    }

    #[test]
    fn fails_invalid_choices() {
        assert_matches::assert_matches!(Choice::from_str("dance"), Err(err) => {
            assert_eq!(format!("{err:#}"), "invalid choice: dance");
        });
        assert_matches::assert_matches!(Choice::from_str("attack x"), Err(err) => {
            assert!(format!("{err:#}").starts_with("invalid attack target"));
        });
        assert_matches::assert_matches!(Choice::from_str("cast"), Err(err) => {
            assert_eq!(format!("{err:#}"), "missing spell slot");
        });
        assert_matches::assert_matches!(Choice::from_str("equip shield 0"), Err(err) => {
            assert_eq!(format!("{err:#}"), "invalid equipment slot: shield");
        });
        assert_matches::assert_matches!(Choice::from_str("equip armor 0,spiky"), Err(err) => {
            assert_eq!(format!("{err:#}"), "invalid option in equip choice: spiky");
        });
    }

    #[test]
    fn only_actions_consume_turn() {
        assert!(Choice::Attack(AttackChoice::default()).consumes_turn());
        assert!(Choice::Cast(CastChoice::default()).consumes_turn());
        assert!(Choice::Potion(PotionChoice::default()).consumes_turn());
        assert!(Choice::Flee.consumes_turn());
        assert!(!Choice::Equip(EquipChoice::default()).consumes_turn());
        assert!(!Choice::Inspect.consumes_turn());
    }

    #[test]
    fn serializes_and_deserializes_lists() {
        let choices = Vec::from_iter([
            Choice::Inspect,
            Choice::Attack(AttackChoice { target: Some(0) }),
            Choice::Flee,
        ]);
        let serialized = choices_to_string(choices.clone());
        assert_eq!(serialized, "inspect;attack 0;flee");
        pretty_assertions::assert_eq!(choices_from_string(serialized).unwrap(), choices);
        assert_matches::assert_matches!(choices_from_string("attack; flee ;"), Ok(choices) => {
            assert_eq!(choices.len(), 2);
        });
    }
}
