//! Suggestion gateway: request/response wrapper tracking the visible state
//! and the provider that last answered.

use crate::suggestion::{
    domain::{ProviderId, ProviderRegistry, SUGGESTION_ERROR_MESSAGE, Suggestion, SuggestionState},
    ports::{SuggestionBackend, SuggestionBackendError},
};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for suggestion requests.
#[derive(Debug, Clone, Error)]
pub enum SuggestionGatewayError {
    /// The backend failed to answer.
    #[error(transparent)]
    Backend(#[from] SuggestionBackendError),
}

impl SuggestionGatewayError {
    /// Returns the message shown in place of the suggestion.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(SuggestionBackendError::Rejected { detail }) => detail.clone(),
            Self::Backend(_) => SUGGESTION_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Result type for suggestion gateway operations.
pub type SuggestionGatewayResult<T> = Result<T, SuggestionGatewayError>;

#[derive(Debug, Default)]
struct GatewayState {
    suggestion: SuggestionState,
    registry: ProviderRegistry,
    active: Option<ProviderId>,
    issued_request: u64,
}

/// Suggestion gateway over a [`SuggestionBackend`].
pub struct SuggestionGateway<B>
where
    B: SuggestionBackend,
{
    backend: Arc<B>,
    state: Arc<RwLock<GatewayState>>,
}

impl<B> Clone for SuggestionGateway<B>
where
    B: SuggestionBackend,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
        }
    }
}

impl<B> fmt::Debug for SuggestionGateway<B>
where
    B: SuggestionBackend,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionGateway")
            .field("state", &*self.read_state())
            .finish_non_exhaustive()
    }
}

impl<B> SuggestionGateway<B>
where
    B: SuggestionBackend,
{
    /// Creates an idle gateway backed by `backend`.
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(GatewayState::default())),
        }
    }

    /// Reads the provider registry and adopts its active provider.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionGatewayError::Backend`] when the registry cannot
    /// be read; the previous registry is kept.
    pub async fn load_providers(&self) -> SuggestionGatewayResult<ProviderRegistry> {
        let registry = self.backend.providers().await.map_err(|err| {
            warn!(error = %err, "provider registry unavailable");
            SuggestionGatewayError::from(err)
        })?;
        let mut state = self.write_state();
        state.active = registry.active().cloned();
        state.registry = registry.clone();
        info!(
            providers = registry.providers().len(),
            active = registry.active().map(ProviderId::as_str),
            "provider registry loaded"
        );
        Ok(registry)
    }

    /// Requests a suggestion for `context`.
    ///
    /// The visible state is [`SuggestionState::Pending`] until the backend
    /// answers, then holds the suggestion or the error message. The active
    /// provider changes only when a successful answer names one. If a newer
    /// request was issued meanwhile, the answer is returned but not shown.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionGatewayError::Backend`] when the backend fails.
    pub async fn suggest(&self, context: &str) -> SuggestionGatewayResult<Suggestion> {
        let request = {
            let mut state = self.write_state();
            state.issued_request = state.issued_request.wrapping_add(1);
            state.suggestion = SuggestionState::Pending;
            state.issued_request
        };

        let outcome = self.backend.suggest(context).await;

        let mut state = self.write_state();
        let is_latest = request == state.issued_request;
        if !is_latest {
            debug!(request, latest = state.issued_request, "discarding superseded suggestion");
        }
        match outcome {
            Ok(suggestion) => {
                if is_latest {
                    state.suggestion = SuggestionState::Ready(suggestion.text().to_owned());
                    if let Some(provider) = suggestion.provider() {
                        state.active = Some(provider.clone());
                    }
                }
                debug!(provider = suggestion.provider().map(ProviderId::as_str), "suggestion received");
                Ok(suggestion)
            }
            Err(err) => {
                warn!(error = %err, "suggestion request failed");
                let failure = SuggestionGatewayError::from(err);
                if is_latest {
                    state.suggestion = SuggestionState::Ready(failure.user_message());
                }
                Err(failure)
            }
        }
    }

    /// Returns the caller-visible suggestion state.
    #[must_use]
    pub fn state(&self) -> SuggestionState {
        self.read_state().suggestion.clone()
    }

    /// Returns the provider that answered last, or the registry's active
    /// provider before any answer.
    #[must_use]
    pub fn active_provider(&self) -> Option<ProviderId> {
        self.read_state().active.clone()
    }

    /// Returns the last loaded provider registry.
    #[must_use]
    pub fn providers(&self) -> ProviderRegistry {
        self.read_state().registry.clone()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, GatewayState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GatewayState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
