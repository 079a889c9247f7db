//! Error types for suggestion domain validation.

use thiserror::Error;

/// Errors returned while constructing suggestion domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionDomainError {
    /// The provider identifier is empty after trimming.
    #[error("provider identifier must not be empty")]
    EmptyProviderId,
}
