use tracing::subscriber::set_global_default;
use tracing_subscriber::fmt;
use tracing_subscriber::Registry;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
/// Logs go to stderr; stdout is reserved for the deal listing.
pub fn init_telemetry(default_level: &str) {
    // Level filter layer to filter traces based on level (trace, debug, info, warn, error).
    let level_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let formatting_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(level_filter_layer)
        .with(formatting_layer);

    set_global_default(subscriber).expect("Failed to set subscriber");
}
