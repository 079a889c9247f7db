//! Port contracts for the laundry item lifecycle.
//!
//! Ports define infrastructure-agnostic interfaces used by item services.

pub mod authority;

pub use authority::{AuthorityError, AuthorityResult, ItemAuthority};
