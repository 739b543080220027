//! Console logging.
//!
//! Logs go to stderr so listings on stdout can be piped.

use log::LevelFilter;

/// Pick the log level.
///
/// `verbose` forces debug, otherwise the configured level is used and an
/// unknown or missing level falls back to info.
pub fn log_level(verbose: bool, configured: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    configured
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize env_logger. `RUST_LOG` still overrides the chosen level.
pub fn init_logging(verbose: bool, configured: Option<&str>) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose, configured))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}
