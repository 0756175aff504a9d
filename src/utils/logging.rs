//! Diagnostic logging to stderr. User-facing output stays on stdout via
//! `ui::messages`; the persistent audit trail lives in the `log` table.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "OVERWATCHER_LOG";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=warn",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
