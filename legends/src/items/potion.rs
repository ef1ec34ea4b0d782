use std::{
    fmt::Display,
    str::FromStr,
};

use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    common::Error,
    error::general_error,
    items::{
        Durability,
        ItemKind,
        impl_item,
    },
};

/// An attribute of a hero raised by a potion.
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
pub enum PotionAttribute {
    #[string = "Health"]
    #[alias = "HP"]
    Health,
    #[string = "Mana"]
    #[alias = "MP"]
    Mana,
    #[string = "Strength"]
    Strength,
    #[string = "Agility"]
    Agility,
    #[string = "Dexterity"]
    Dexterity,
}

/// The set of attributes a potion raises.
///
/// Parsed from strings like `"Health/Mana"`, where attributes may be separated by slashes, commas,
/// or spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PotionAttributes(Vec<PotionAttribute>);

impl PotionAttributes {
    /// Creates a new attribute set.
    pub fn new<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = PotionAttribute>,
    {
        Self(attributes.into_iter().collect())
    }

    /// Iterates over all attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = PotionAttribute> + '_ {
        self.0.iter().copied()
    }
}

impl Display for PotionAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("/"))
    }
}

impl FromStr for PotionAttributes {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let attributes = s
            .split(['/', ',', ' '])
            .map(|attribute| attribute.trim())
            .filter(|attribute| !attribute.is_empty())
            .map(|attribute| PotionAttribute::from_str(attribute).map_err(general_error))
            .collect::<Result<Vec<_>, _>>()?;
        if attributes.is_empty() {
            return Err(general_error("potion must affect at least one attribute"));
        }
        Ok(Self(attributes))
    }
}

impl TryFrom<String> for PotionAttributes {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<PotionAttributes> for String {
    fn from(value: PotionAttributes) -> Self {
        value.to_string()
    }
}

fn default_durability() -> Durability {
    ItemKind::Potion.default_durability()
}

/// A potion, which permanently raises one or more attributes of the hero that drinks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub cost: f64,
    pub required_level: u32,
    /// Amount added to each affected attribute.
    pub amount: f64,
    pub attributes: PotionAttributes,
    #[serde(default = "default_durability")]
    pub uses: Durability,
}

impl_item!(Potion, ItemKind::Potion);

#[cfg(test)]
mod potion_test {
    use std::str::FromStr;

    use crate::{
        common::{
            test_string_deserialization,
            test_string_serialization,
        },
        items::{
            Durability,
            Item,
            Potion,
            PotionAttribute,
            PotionAttributes,
        },
    };

    #[test]
    fn parses_legacy_attribute_lists() {
        assert_eq!(
            PotionAttributes::from_str("Health/Mana").unwrap(),
            PotionAttributes::new([PotionAttribute::Health, PotionAttribute::Mana])
        );
        assert_eq!(
            PotionAttributes::from_str("strength, dexterity agility").unwrap(),
            PotionAttributes::new([
                PotionAttribute::Strength,
                PotionAttribute::Dexterity,
                PotionAttribute::Agility,
            ])
        );
        assert_eq!(
            PotionAttributes::from_str("hp/MP").unwrap(),
            PotionAttributes::new([PotionAttribute::Health, PotionAttribute::Mana])
        );
    }

    #[test]
    fn rejects_unknown_attributes() {
        assert!(PotionAttributes::from_str("Health/Luck").is_err());
        assert!(PotionAttributes::from_str(" / ").is_err());
    }

    #[test]
    fn serializes_attributes_as_string() {
        test_string_serialization(
            PotionAttributes::new([PotionAttribute::Agility, PotionAttribute::Dexterity]),
            "Agility/Dexterity",
        );
        test_string_deserialization(
            "Health, Mana",
            PotionAttributes::new([PotionAttribute::Health, PotionAttribute::Mana]),
        );
    }

    #[test]
    fn deserializes_with_default_uses() {
        let potion = serde_json::from_str::<Potion>(
            r#"{
                "name": "Healing_Potion",
                "cost": 250,
                "required_level": 1,
                "amount": 100,
                "attributes": "Health"
            }"#,
        )
        .unwrap();
        assert_eq!(potion.uses, Durability::Remaining(3));
        assert_eq!(potion.name(), "Healing_Potion");
        assert_eq!(potion.cost(), 250.0);
    }
}
