//! Tracing subscriber setup.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default log level for a `-v` count.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the `-v` level.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("markup_guard={level},markup_guard_cli={level}"))
    });

    // A subscriber may already be set (e.g. by a test harness).
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        debug!(%err, "tracing subscriber already installed");
    }
}
