//! Tracing subscriber installation for binaries.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directives could not be parsed.
    #[error("invalid log filter '{directives}': {source}")]
    InvalidFilter {
        /// Directives that failed to parse.
        directives: String,
        /// Underlying parse failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset or invalid.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_filter` is needed
/// and invalid, or [`TelemetryError::Install`] when a subscriber is already
/// installed.
pub fn init(default_filter: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| parse_filter(default_filter))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        directives: directives.to_owned(),
        source,
    })
}
