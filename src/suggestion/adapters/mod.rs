//! Adapter implementations for the suggestion backend port.

pub mod http;
pub mod local;

pub use http::HttpSuggestionBackend;
pub use local::{
    HeuristicProvider, InProcessSuggestionBackend, LOCAL_PROVIDER, OPENAI_PROVIDER,
    PlaceholderProvider, SuggestionProvider,
};
