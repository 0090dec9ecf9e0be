pub(crate) mod quick;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

/// Sends `tracing` output to the test harness. The filter comes from
/// `RUST_LOG` and falls back to `trace` for this crate.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rebuild_bst=trace"));

        // A subscriber may already be installed globally.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
