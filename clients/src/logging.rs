//! Diagnostic output on stderr.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Returns the maximum level for the `--verbose` and `--quiet` flags.
/// `--verbose` wins when both are given.
#[must_use]
pub fn level(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber, writing compact lines to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_level() {
        assert_eq!(level(false, false), Level::INFO);
        assert_eq!(level(true, false), Level::DEBUG);
        assert_eq!(level(false, true), Level::WARN);
        assert_eq!(level(true, true), Level::DEBUG);
    }
}
