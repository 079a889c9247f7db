//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use laundry_ai::item::{
    adapters::memory::InMemoryItemAuthority,
    domain::LaundryStatus,
    services::{CreateItemRequest, ItemStore},
};
use rstest::fixture;

/// Store type used by the in-memory integration tests.
pub type TestStore = ItemStore<InMemoryItemAuthority>;

/// Store and authority sharing one in-memory state.
pub struct Board {
    /// Authority owning the items.
    pub authority: Arc<InMemoryItemAuthority>,
    /// Store caching the authority's listing.
    pub store: TestStore,
}

/// Provides an empty board for each test.
#[fixture]
pub fn board() -> Board {
    let authority = Arc::new(InMemoryItemAuthority::new());
    let store = ItemStore::new(Arc::clone(&authority));
    Board { authority, store }
}

/// Creates one item per `(label, status)` pair through the store.
///
/// # Errors
///
/// Returns an error if any creation is rejected.
pub async fn seed(store: &TestStore, items: &[(&str, LaundryStatus)]) -> eyre::Result<()> {
    for (label, status) in items {
        store
            .create(CreateItemRequest::new(*label).with_status(*status))
            .await?;
    }
    Ok(())
}
