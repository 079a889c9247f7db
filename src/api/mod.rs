//! HTTP plumbing shared by the remote adapters.
//!
//! [`ApiClient`] resolves endpoint paths beneath the configured base URL,
//! sends JSON requests and turns non-success responses into [`ApiError`]s
//! that keep the authority's `detail` message when one is present.

use crate::config::ClientConfig;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use url::Url;

const MAX_DETAIL_CHARS: usize = 500;

/// Result type for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An endpoint path could not be resolved against the base URL.
    #[error("invalid endpoint path '{path}': {source}")]
    InvalidEndpoint {
        /// Relative path that failed to resolve.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client failure.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} answered {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
        /// Detail message extracted from the error body, if any.
        detail: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decoding failure.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the server-supplied detail message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Health reported by the authority's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceHealth {
    /// The endpoint answered with this status text.
    Reported(String),
    /// The endpoint could not be reached or answered unusably.
    Unavailable,
}

impl ServiceHealth {
    /// Returns the text shown to users.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reported(status) => status,
            Self::Unavailable => "error",
        }
    }

    /// Returns `true` when the authority reported `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Reported(status) if status == "ok")
    }
}

impl fmt::Display for ServiceHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(serde::Deserialize)]
struct HealthBody {
    #[serde(default)]
    status: Option<String>,
}

/// JSON client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client with the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self::with_client(http, config.api_base_url().clone()))
    }

    /// Wraps an existing HTTP client.
    ///
    /// A trailing slash is appended to the base path when missing so that
    /// relative endpoint paths resolve beneath it.
    #[must_use]
    pub fn with_client(http: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { http, base_url }
    }

    /// Returns the base URL all endpoint paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a `GET` request and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body that does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        let response = execute(self.http.get(url.clone()), &url).await?;
        decode(response, &url).await
    }

    /// Sends a JSON body with `method` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body that does not decode as `T`.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self.http.request(method, url.clone()).json(body);
        let response = execute(request, &url).await?;
        decode(response, &url).await
    }

    /// Sends a `DELETE` request, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path)?;
        execute(self.http.delete(url.clone()), &url).await?;
        Ok(())
    }

    /// Probes the health endpoint.
    ///
    /// Never fails: unreachable or malformed answers report
    /// [`ServiceHealth::Unavailable`], and a missing status reads `unknown`.
    pub async fn health(&self) -> ServiceHealth {
        match self.get_json::<HealthBody>("health").await {
            Ok(body) => ServiceHealth::Reported(
                body.status
                    .filter(|status| !status.trim().is_empty())
                    .unwrap_or_else(|| "unknown".to_owned()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                ServiceHealth::Unavailable
            }
        }
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidEndpoint {
                path: path.to_owned(),
                source,
            })
    }
}

async fn execute(request: RequestBuilder, url: &Url) -> ApiResult<Response> {
    tracing::debug!(%url, "sending API request");
    let response = request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    tracing::debug!(%url, %status, detail = detail.as_deref(), "API request rejected");
    Err(ApiError::Status {
        url: url.to_string(),
        status,
        detail,
    })
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> ApiResult<T> {
    response.json().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Pulls the `detail` member out of an error body.
///
/// String details are returned as-is; structured details are rendered as
/// compact JSON. Bodies without a `detail` member yield `None`.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = match value.get("detail")? {
        serde_json::Value::String(text) => text.trim().to_owned(),
        serde_json::Value::Null => return None,
        other => other.to_string(),
    };
    if detail.is_empty() {
        return None;
    }
    Some(detail.chars().take(MAX_DETAIL_CHARS).collect())
}
