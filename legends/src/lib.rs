//! A turn-based battle engine for a party of heroes fighting a group of monsters.
//!
//! The engine performs no I/O. Player decisions come from a [`DecisionSource`], randomness from a
//! replayable [`PseudoRandomNumberGenerator`], and everything that happens is recorded as
//! [`Event`]s for a presentation layer to render.

extern crate alloc;

pub mod battle;
pub mod common;
pub mod config;
pub mod error;
pub mod heroes;
pub mod items;
pub mod log;
pub mod monsters;

pub use battle::{
    ActionRequest,
    Battle,
    BattleEngineOptions,
    BattleOptions,
    BattleOutcome,
    BattleState,
    DecisionSource,
    TargetRequest,
    TargetingPolicy,
    TargetingPolicyType,
    run_battle,
};
pub use config::Difficulty;
pub use heroes::{
    Hero,
    HeroClass,
    HeroData,
};
pub use legends_choice::Choice;
pub use legends_prng::PseudoRandomNumberGenerator;
pub use crate::log::{
    Event,
    EventLog,
};
pub use monsters::{
    Monster,
    MonsterData,
    MonsterKind,
    spawn_monsters,
};
