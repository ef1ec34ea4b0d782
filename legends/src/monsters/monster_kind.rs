use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The kind of a monster, which determines its innate strength.
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
pub enum MonsterKind {
    /// Deals 10% more base damage.
    #[string = "Dragon"]
    Dragon,
    /// Has 10% more defense.
    #[string = "Exoskeleton"]
    Exoskeleton,
    /// Has a 10% higher dodge chance.
    #[string = "Spirit"]
    Spirit,
}

#[cfg(test)]
mod monster_kind_test {
    use crate::{
        common::{
            test_string_deserialization,
            test_string_serialization,
        },
        monsters::MonsterKind,
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MonsterKind::Dragon, "Dragon");
        test_string_serialization(MonsterKind::Exoskeleton, "Exoskeleton");
        test_string_serialization(MonsterKind::Spirit, "Spirit");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("dragon", MonsterKind::Dragon);
        test_string_deserialization("spirit", MonsterKind::Spirit);
    }
}
