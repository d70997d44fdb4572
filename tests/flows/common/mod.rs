use aisle_domain::Config;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route cache tracing to the test writer. `RUST_LOG` wins when set;
/// otherwise the filter comes from the configured logging level, the same
/// way a host binary would build it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Config::default().logging.directive(None)));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
