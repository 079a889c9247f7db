//! Port contracts for the suggestion gateway.

pub mod backend;

pub use backend::{SuggestionBackend, SuggestionBackendError, SuggestionBackendResult};
