//! Logging initialization.
//!
//! Structured logging via `tracing`, written to stderr so the report on stdout
//! stays a single line. `VERINFO_LOG` overrides every other source.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "VERINFO_LOG";

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Picks the filter directive: `configured` (from config.toml) unless the
/// user asked for more output with `-v`.
pub fn resolve_directive(verbosity: u8, configured: Option<&str>) -> String {
    match configured {
        Some(level) if verbosity == 0 => level.to_string(),
        _ => verbosity_to_directive(verbosity).to_string(),
    }
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(verbosity: u8, configured: Option<&str>) {
    let directive = resolve_directive(verbosity, configured);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&directive))
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
