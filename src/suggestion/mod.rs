//! AI wash suggestions keyed on free-text context.
//!
//! The gateway forwards context to a suggestion backend, exposes the
//! three-state `idle → pending → ready` view of the request, and remembers
//! which provider answered last. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The gateway in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
