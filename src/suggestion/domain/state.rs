//! Suggestion results and the caller-visible request state.

use super::ProviderId;

/// Text shown while a suggestion request is in flight.
pub const PENDING_PLACEHOLDER: &str = "...";

/// Text shown in place of a suggestion when the request failed.
pub const SUGGESTION_ERROR_MESSAGE: &str = "Error fetching suggestion";

/// Suggestion text together with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    text: String,
    provider: Option<ProviderId>,
}

impl Suggestion {
    /// Creates a suggestion; `provider` is `None` when the backend did not
    /// say who answered.
    #[must_use]
    pub fn new(text: impl Into<String>, provider: Option<ProviderId>) -> Self {
        Self {
            text: text.into(),
            provider,
        }
    }

    /// Returns the suggestion text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the answering provider, if reported.
    #[must_use]
    pub const fn provider(&self) -> Option<&ProviderId> {
        self.provider.as_ref()
    }
}

/// Caller-visible state of the suggestion panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionState {
    /// No suggestion has been requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request finished with this text (a suggestion or the error
    /// message).
    Ready(String),
}

impl SuggestionState {
    /// Returns the text to display for this state.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Pending => PENDING_PLACEHOLDER,
            Self::Ready(text) => text,
        }
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
