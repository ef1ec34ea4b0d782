use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An attribute that grows when a hero levels up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Strength,
    Agility,
    Dexterity,
}

/// The class of a hero, which determines how the hero grows.
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
pub enum HeroClass {
    #[string = "Warrior"]
    Warrior,
    #[string = "Paladin"]
    Paladin,
    #[string = "Sorcerer"]
    Sorcerer,
}

impl HeroClass {
    /// The two stats that receive extra growth on level up.
    pub fn favored_stats(&self) -> [Stat; 2] {
        match self {
            Self::Warrior => [Stat::Strength, Stat::Agility],
            Self::Paladin => [Stat::Strength, Stat::Dexterity],
            Self::Sorcerer => [Stat::Dexterity, Stat::Agility],
        }
    }
}

#[cfg(test)]
mod hero_class_test {
    use crate::{
        common::{
            test_string_deserialization,
            test_string_serialization,
        },
        heroes::{
            HeroClass,
            Stat,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(HeroClass::Warrior, "Warrior");
        test_string_serialization(HeroClass::Sorcerer, "Sorcerer");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("paladin", HeroClass::Paladin);
    }

    #[test]
    fn favors_two_stats() {
        assert_eq!(
            HeroClass::Warrior.favored_stats(),
            [Stat::Strength, Stat::Agility]
        );
        assert_eq!(
            HeroClass::Paladin.favored_stats(),
            [Stat::Strength, Stat::Dexterity]
        );
        assert_eq!(
            HeroClass::Sorcerer.favored_stats(),
            [Stat::Dexterity, Stat::Agility]
        );
    }
}
