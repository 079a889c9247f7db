//! Client configuration.
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables:
//!
//! | Variable                       | Field                  |
//! |--------------------------------|------------------------|
//! | `LAUNDRY_API_URL`              | `api_base_url`         |
//! | `LAUNDRY_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |
//! | `LAUNDRY_CONNECT_TIMEOUT_SECS` | `connect_timeout_secs` |
//! | `LAUNDRY_LOG`                  | `log_filter`           |
//!
//! A representative file:
//!
//! ```toml
//! api_base_url = "http://localhost:8000/api/"
//! request_timeout_secs = 30
//! log_filter = "laundry_ai=debug"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "LAUNDRY_API_URL";
/// Environment variable overriding the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "LAUNDRY_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the connect timeout in seconds.
pub const CONNECT_TIMEOUT_ENV: &str = "LAUNDRY_CONNECT_TIMEOUT_SECS";
/// Environment variable overriding the log filter directive.
pub const LOG_FILTER_ENV: &str = "LAUNDRY_LOG";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`ClientConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },

    /// A base URL could not be parsed or cannot carry relative paths.
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// A timeout override is not a positive whole number of seconds.
    #[error("invalid value '{value}' for {key}, expected a positive number of seconds")]
    InvalidTimeout {
        /// Setting or variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// On-disk shape of the configuration; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    log_filter: Option<String>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: Url,
    request_timeout: Duration,
    connect_timeout: Duration,
    log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from an optional file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when any value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path.map(read_config_file).transpose()?.unwrap_or_default();
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Parses TOML text and applies overrides from `lookup`.
    ///
    /// `lookup` stands in for the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not valid configuration or
    /// any value is invalid.
    pub fn from_toml_str(
        text: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::resolve(file, lookup)
    }

    fn resolve(
        file: ConfigFile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = lookup(API_URL_ENV)
            .or(file.api_base_url)
            .map(|raw| parse_base_url(&raw))
            .transpose()?
            .unwrap_or(defaults.api_base_url);
        let request_timeout = resolve_timeout(
            REQUEST_TIMEOUT_ENV,
            lookup(REQUEST_TIMEOUT_ENV),
            file.request_timeout_secs,
            defaults.request_timeout,
        )?;
        let connect_timeout = resolve_timeout(
            CONNECT_TIMEOUT_ENV,
            lookup(CONNECT_TIMEOUT_ENV),
            file.connect_timeout_secs,
            defaults.connect_timeout,
        )?;
        let log_filter = lookup(LOG_FILTER_ENV)
            .or(file.log_filter)
            .map(|filter| filter.trim().to_owned())
            .filter(|filter| !filter.is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            api_base_url,
            request_timeout,
            connect_timeout,
            log_filter,
        })
    }

    /// Replaces the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL cannot carry
    /// relative endpoint paths.
    pub fn with_api_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// Returns the API base URL; it always ends with `/`.
    #[must_use]
    pub const fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Returns the total timeout applied to each request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the TCP connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the fallback log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[expect(
    clippy::expect_used,
    reason = "the default base URL is a compile-time literal known to parse"
)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL must parse")
}

/// Parses a base URL and guarantees a trailing slash so `Url::join` keeps
/// the final path segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_owned()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn resolve_timeout(
    key: &'static str,
    env_value: Option<String>,
    file_value: Option<u64>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let secs = env_value
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { key, value: raw.clone() })
        })
        .transpose()?
        .or(file_value);
    match secs {
        Some(0) => Err(ConfigError::InvalidTimeout {
            key,
            value: "0".to_owned(),
        }),
        Some(value) => Ok(Duration::from_secs(value)),
        None => Ok(default),
    }
}
