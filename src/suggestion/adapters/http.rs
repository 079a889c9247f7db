//! HTTP adapter for the remote suggestion backend.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};
use crate::suggestion::{
    domain::{ProviderId, ProviderRegistry, Suggestion},
    ports::{SuggestionBackend, SuggestionBackendError, SuggestionBackendResult},
};

const PROVIDERS_PATH: &str = "providers";
const SUGGEST_PATH: &str = "ai/suggest";

#[derive(Debug, Serialize)]
struct SuggestBody<'a> {
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestionRecord {
    suggestion: String,
    #[serde(default)]
    provider: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProvidersRecord {
    #[serde(default)]
    providers: Vec<String>,
    #[serde(default)]
    active: Option<String>,
}

/// Suggestion backend reached over the JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSuggestionBackend {
    client: ApiClient,
}

impl HttpSuggestionBackend {
    /// Creates a backend adapter using `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Reads an optional provider name; blank names count as absent.
fn optional_provider(raw: Option<String>) -> Option<ProviderId> {
    raw.and_then(|name| ProviderId::new(name).ok())
}

fn map_api_error(err: ApiError) -> SuggestionBackendError {
    if let Some(detail) = err.detail() {
        return SuggestionBackendError::Rejected {
            detail: detail.to_owned(),
        };
    }
    match err {
        ApiError::Decode { .. } => SuggestionBackendError::invalid_response(err),
        other => SuggestionBackendError::transport(other),
    }
}

#[async_trait]
impl SuggestionBackend for HttpSuggestionBackend {
    async fn suggest(&self, context: &str) -> SuggestionBackendResult<Suggestion> {
        let record: SuggestionRecord = self
            .client
            .send_json(Method::POST, SUGGEST_PATH, &SuggestBody { context })
            .await
            .map_err(map_api_error)?;
        Ok(Suggestion::new(
            record.suggestion,
            optional_provider(record.provider),
        ))
    }

    async fn providers(&self) -> SuggestionBackendResult<ProviderRegistry> {
        let record: ProvidersRecord = self
            .client
            .get_json(PROVIDERS_PATH)
            .await
            .map_err(map_api_error)?;
        let providers = record
            .providers
            .into_iter()
            .filter_map(|name| ProviderId::new(name).ok());
        Ok(ProviderRegistry::new(
            providers,
            optional_provider(record.active),
        ))
    }
}
