mod decisions;
mod env;
mod error_assert;
mod log_util;
mod rng;
mod test_battle_builder;

pub use decisions::ScriptedDecisions;
pub use env::setup_test_environment;
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_util::{
    LogMatch,
    assert_logs_since_round_eq,
    assert_new_logs_eq,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use test_battle_builder::TestBattleBuilder;
