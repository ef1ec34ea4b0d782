mod difficulty;

pub use difficulty::{
    Difficulty,
    EncounterRate,
};
