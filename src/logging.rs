//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`; user-facing output goes
//! through `ui::messages`. The filter comes from `RCAMPAIGN_LOG`
//! (e.g. `RCAMPAIGN_LOG=debug`), defaulting to warnings and errors.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RCAMPAIGN_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
