use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A recoverable failure of a hero action.
///
/// Action errors never end a battle. The hero keeps their turn and is asked for another decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionError {
    #[error("not enough mana")]
    NotEnoughMana,
    #[error("item is broken")]
    ItemBroken,
    #[error("no such item")]
    NoSuchItem,
    #[error("no such target")]
    NoTarget,
    #[error("hero has fainted")]
    Fainted,
    #[error("target is already defeated")]
    TargetDefeated,
}

impl ActionError {
    /// The short reason used in battle events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotEnoughMana => "notenoughmana",
            Self::ItemBroken => "itembroken",
            Self::NoSuchItem => "nosuchitem",
            Self::NoTarget => "notarget",
            Self::Fainted => "fainted",
            Self::TargetDefeated => "targetdefeated",
        }
    }
}
