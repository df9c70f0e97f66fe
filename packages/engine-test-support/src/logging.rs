//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// `TEST_LOG`, then `RUST_LOG`, then `"warn"` so replay-heavy suites stay
/// quiet unless asked otherwise.
fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a tracing subscriber for tests.
///
/// Idempotent: every test binary may call this from a `ctor` hook. Set
/// `TEST_LOG_JSON=1` to get JSON lines instead, which is handy when diffing
/// engine traces between two replays of the same log.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1");
        let builder = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time();
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
