// src/logging.rs
//
// Priority: RUST_LOG > --debug > [logging] level > "info".
// Never log tokens, passwords, or API keys.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    // try_init: tests and embedders may have installed a subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .compact()
        .try_init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
