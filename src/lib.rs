//! Laundry AI: laundry item lifecycle tracking with AI wash suggestions.
//!
//! This crate keeps a client-side view of laundry items owned by a remote
//! authority, derives filtered per-status boards from it, and fronts an AI
//! suggestion backend.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`item`]: Item lifecycle, snapshot store and query/group engine
//! - [`suggestion`]: Suggestion gateway and provider registry
//! - [`api`]: Shared JSON HTTP client
//! - [`config`]: Client configuration from TOML and environment
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod item;
pub mod suggestion;
pub mod telemetry;
