//! Shared fixtures for `vscode-test-launcher` integration tests.

pub mod builders;
pub mod fakes;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Defaults to `info` for this crate and `warn` for everything else.
/// Enable levels with e.g.:
/// `RUST_LOG=vscode_test_launcher=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,vscode_test_launcher=info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Upper bound for any single launch in tests.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a future with [`TEST_TIMEOUT`], panicking if it doesn't finish.
///
/// Use `tokio::time::timeout` directly when a test expects the launch to
/// stay pending.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .expect("launch did not finish within the test timeout")
}
