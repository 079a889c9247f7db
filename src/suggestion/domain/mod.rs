//! Domain model for AI wash suggestions.

mod error;
mod provider;
mod state;

pub use error::SuggestionDomainError;
pub use provider::{ProviderId, ProviderRegistry};
pub use state::{PENDING_PLACEHOLDER, SUGGESTION_ERROR_MESSAGE, Suggestion, SuggestionState};
