//! Shared test setup: tracing output for tests, honoring RUST_LOG.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a stderr tracing subscriber once per test binary.
///
/// Safe to call from every test; later calls (and other binaries that
/// already installed a global subscriber) are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );
        let _ = subscriber.try_init();
    });
}
