//! Suggestion backend port: answers free-text context with a wash suggestion.

use crate::suggestion::domain::{ProviderId, ProviderRegistry, Suggestion};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for suggestion backend operations.
pub type SuggestionBackendResult<T> = Result<T, SuggestionBackendError>;

/// Service producing suggestions through one of several providers.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Asks the active provider for a suggestion.
    ///
    /// Empty context is passed through; the provider decides what it means.
    async fn suggest(&self, context: &str) -> SuggestionBackendResult<Suggestion>;

    /// Returns the known providers and the active one.
    async fn providers(&self) -> SuggestionBackendResult<ProviderRegistry>;
}

/// Errors returned by suggestion backends.
#[derive(Debug, Clone, Error)]
pub enum SuggestionBackendError {
    /// The configured provider is not registered.
    #[error("unknown provider: {0}")]
    UnknownProvider(ProviderId),

    /// The backend refused the request with a detail message.
    #[error("suggestion rejected: {detail}")]
    Rejected {
        /// Detail message supplied by the backend.
        detail: String,
    },

    /// The backend answered with an unusable body.
    #[error("invalid suggestion response: {0}")]
    InvalidResponse(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend could not be reached or failed without detail.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SuggestionBackendError {
    /// Wraps a response decoding or validation error.
    pub fn invalid_response(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidResponse(Arc::new(err))
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
