mod battle;
mod battle_options;
pub mod combat;
mod outcome;
mod request;
mod targeting;

pub use battle::{
    Battle,
    BattleState,
    run_battle,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
};
pub use outcome::BattleOutcome;
pub use request::{
    ActionRequest,
    DecisionSource,
    TargetRequest,
};
pub use targeting::{
    LowestHpTargeting,
    RandomTargeting,
    TargetingPolicy,
    TargetingPolicyType,
};
