//! In-process suggestion providers.
//!
//! [`HeuristicProvider`] answers from a fixed keyword table and
//! [`PlaceholderProvider`] stands in for a hosted model until one is wired
//! up. [`InProcessSuggestionBackend`] routes requests to the active one.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::suggestion::{
    domain::{ProviderId, ProviderRegistry, Suggestion, SuggestionDomainError},
    ports::{SuggestionBackend, SuggestionBackendError, SuggestionBackendResult},
};

/// Identifier of the keyword heuristic provider.
pub const LOCAL_PROVIDER: &str = "local";

/// Identifier of the hosted-model placeholder provider.
pub const OPENAI_PROVIDER: &str = "openai";

/// A provider able to answer suggestion requests in process.
pub trait SuggestionProvider: Send + Sync {
    /// Returns the provider identifier.
    fn id(&self) -> &ProviderId;

    /// Produces a suggestion for `context`.
    fn suggest(&self, context: &str) -> String;
}

/// Deterministic keyword heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicProvider {
    id: ProviderId,
}

impl HeuristicProvider {
    const EMPTY_CONTEXT: &'static str =
        "Sortiere nach Farbe und Material; nutze 30°C Feinwäsche als Standard.";
    const FALLBACK: &'static str =
        "Standard-Empfehlung: Farben trennen, 30–40°C, schonendes Waschmittel.";
    const RULES: [(&'static [&'static str], &'static str); 3] = [
        (
            &["weiß", "weiss", "white"],
            "Weiße Wäsche: 60°C wenn Baumwolle, sonst 40°C; separat von Farben waschen.",
        ),
        (
            &["wolle", "wool"],
            "Wolle: Handwäsche/Schonwaschgang, kaltes Wasser, Wollwaschmittel.",
        ),
        (
            &["rot", "red"],
            "Rote Wäsche separat beim ersten Mal waschen, 30–40°C.",
        ),
    ];

    /// Creates the heuristic provider registered as `local`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError`] if the identifier fails validation.
    pub fn new() -> Result<Self, SuggestionDomainError> {
        Ok(Self {
            id: ProviderId::new(LOCAL_PROVIDER)?,
        })
    }
}

impl SuggestionProvider for HeuristicProvider {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn suggest(&self, context: &str) -> String {
        let normalized = context.trim().to_lowercase();
        if normalized.is_empty() {
            return Self::EMPTY_CONTEXT.to_owned();
        }
        Self::RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| normalized.contains(keyword)))
            .map_or(Self::FALLBACK, |(_, advice)| *advice)
            .to_owned()
    }
}

/// Placeholder for a hosted model; echoes the context without calling out.
#[derive(Debug, Clone)]
pub struct PlaceholderProvider {
    id: ProviderId,
}

impl PlaceholderProvider {
    /// Creates the placeholder registered as `openai`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError`] if the identifier fails validation.
    pub fn new() -> Result<Self, SuggestionDomainError> {
        Ok(Self {
            id: ProviderId::new(OPENAI_PROVIDER)?,
        })
    }
}

impl SuggestionProvider for PlaceholderProvider {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn suggest(&self, context: &str) -> String {
        let trimmed = context.trim();
        let subject = if trimmed.is_empty() { "n/a" } else { trimmed };
        format!(
            "[openai placeholder] Suggestion for: '{subject}' (set OPENAI_API_KEY to enable real integration later)"
        )
    }
}

/// Suggestion backend running its providers in process.
#[derive(Clone)]
pub struct InProcessSuggestionBackend {
    providers: BTreeMap<ProviderId, Arc<dyn SuggestionProvider>>,
    active: ProviderId,
}

impl fmt::Debug for InProcessSuggestionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InProcessSuggestionBackend")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}

impl InProcessSuggestionBackend {
    /// Creates a backend without providers that routes to `active`.
    #[must_use]
    pub const fn new(active: ProviderId) -> Self {
        Self {
            providers: BTreeMap::new(),
            active,
        }
    }

    /// Creates a backend with the `local` and `openai` providers, `local`
    /// active.
    ///
    /// # Errors
    ///
    /// Propagates identifier validation of the built-in providers.
    pub fn with_builtin_providers() -> Result<Self, SuggestionDomainError> {
        let heuristic = HeuristicProvider::new()?;
        let backend = Self::new(heuristic.id().clone())
            .with_provider(Arc::new(heuristic))
            .with_provider(Arc::new(PlaceholderProvider::new()?));
        Ok(backend)
    }

    /// Registers `provider`, replacing any provider with the same id.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.providers.insert(provider.id().clone(), provider);
        self
    }

    /// Routes subsequent requests to `active`.
    ///
    /// The provider is looked up per request, so an unknown id only fails
    /// once a suggestion is asked for.
    #[must_use]
    pub fn with_active(mut self, active: ProviderId) -> Self {
        self.active = active;
        self
    }
}

#[async_trait]
impl SuggestionBackend for InProcessSuggestionBackend {
    async fn suggest(&self, context: &str) -> SuggestionBackendResult<Suggestion> {
        let provider = self
            .providers
            .get(&self.active)
            .ok_or_else(|| SuggestionBackendError::UnknownProvider(self.active.clone()))?;
        Ok(Suggestion::new(
            provider.suggest(context),
            Some(self.active.clone()),
        ))
    }

    async fn providers(&self) -> SuggestionBackendResult<ProviderRegistry> {
        Ok(ProviderRegistry::new(
            self.providers.keys().cloned(),
            Some(self.active.clone()),
        ))
    }
}
