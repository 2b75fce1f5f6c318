//! Log setup for the `userfetch` binary.
//!
//! Everything goes to stderr: stdout only carries the fetched users.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` directives win; without them `verbosity_level` applies
/// (ERROR when `None`). HTTP client internals stay at ERROR.
///
/// # Errors
/// Returns an error if a built-in directive fails to parse.
pub fn env_filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.unwrap_or(Level::ERROR).into())
        .from_env_lossy()
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=error".parse()?))
}

/// Install the global stderr subscriber.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter(verbosity_level)?)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults_to_error() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = env_filter(None).unwrap().to_string();

            assert!(filter.contains("error"), "filter: {filter}");
            assert!(filter.contains("reqwest=error"), "filter: {filter}");
            assert!(filter.contains("hyper_util=error"), "filter: {filter}");
        });
    }

    #[test]
    fn test_env_filter_uses_verbosity() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = env_filter(Some(Level::DEBUG)).unwrap().to_string();

            assert!(filter.contains("debug"), "filter: {filter}");
        });
    }

    #[test]
    fn test_env_filter_honors_rust_log() {
        temp_env::with_var("RUST_LOG", Some("userfetch=trace"), || {
            let filter = env_filter(None).unwrap().to_string();

            assert!(filter.contains("userfetch=trace"), "filter: {filter}");
            assert!(filter.contains("reqwest=error"), "filter: {filter}");
        });
    }
}
