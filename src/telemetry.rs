//! Process-wide tracing initialization
//!
//! Called once from the entry point; library modules only emit events
//! through `tracing` and never configure logging themselves.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("loadrig=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
