//! In-memory adapters for item lifecycle tests and offline use.

mod authority;

pub use authority::{InMemoryItemAuthority, TAG_IN_USE_DETAIL};
