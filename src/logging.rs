use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Installs the global fmt subscriber; later calls are no-ops.
///
/// `RUST_LOG` wins over `fallback_filter`, which wins over [`DEFAULT_FILTER`].
pub fn init(fallback_filter: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter.unwrap_or(DEFAULT_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
