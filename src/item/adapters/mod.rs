//! Adapter implementations for item ports.

pub mod http;
pub mod memory;

pub use http::HttpItemAuthority;
