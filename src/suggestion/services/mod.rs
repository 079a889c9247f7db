//! Service layer for the suggestion gateway.

mod gateway;

pub use gateway::{SuggestionGateway, SuggestionGatewayError, SuggestionGatewayResult};
