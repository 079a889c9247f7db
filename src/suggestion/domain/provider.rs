//! Provider identifiers and the registry reported by the suggestion backend.

use super::SuggestionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque provider identifier such as `local`, `openai` or `gpt-4.1`.
///
/// Identifiers are compared exactly as the backend reports them, apart from
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a provider identifier from trimmed, non-blank text.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError::EmptyProviderId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, SuggestionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SuggestionDomainError::EmptyProviderId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProviderId {
    type Error = SuggestionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        id.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known providers and the one currently answering suggestions.
///
/// Providers are kept sorted and unique. The active provider is not
/// required to be listed; the backend decides what it reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRegistry {
    providers: Vec<ProviderId>,
    active: Option<ProviderId>,
}

impl ProviderRegistry {
    /// Creates a registry from the listed providers.
    #[must_use]
    pub fn new(providers: impl IntoIterator<Item = ProviderId>, active: Option<ProviderId>) -> Self {
        let mut listed: Vec<ProviderId> = providers.into_iter().collect();
        listed.sort();
        listed.dedup();
        Self {
            providers: listed,
            active,
        }
    }

    /// Returns the known providers in name order.
    #[must_use]
    pub fn providers(&self) -> &[ProviderId] {
        &self.providers
    }

    /// Returns the active provider, if the backend named one.
    #[must_use]
    pub const fn active(&self) -> Option<&ProviderId> {
        self.active.as_ref()
    }

    /// Returns `true` when `id` is a known provider.
    #[must_use]
    pub fn contains(&self, id: &ProviderId) -> bool {
        self.providers.binary_search(id).is_ok()
    }
}
