use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// How a battle ended.
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
pub enum BattleOutcome {
    /// All monsters were defeated.
    #[string = "victory"]
    Victory,
    /// All heroes fainted.
    #[string = "defeat"]
    Defeat,
    /// The party escaped.
    #[string = "fled"]
    Fled,
}
