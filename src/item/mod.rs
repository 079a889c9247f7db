//! Laundry item lifecycle and query engine.
//!
//! Items move through the `dirty → washing → drying → clean → folded`
//! workflow, keep an append-only status history, and are owned by a remote
//! authority. The client keeps a refresh-only snapshot of the authority's
//! listing and derives filtered, per-status views from it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The snapshot store in [`services`]
//! - Derived views in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
