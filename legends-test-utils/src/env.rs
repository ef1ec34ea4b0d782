use std::sync::Once;

use tracing_core::LevelFilter;

static INIT: Once = Once::new();

/// Routes the engine's diagnostic logs to the test output.
///
/// Safe to call from every test. Only the first call installs the subscriber.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the test harness.
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_test_writer()
            .try_init();
    });
}
