//! Shared world state for item lifecycle BDD scenarios.

use std::sync::Arc;

use laundry_ai::item::{
    adapters::memory::InMemoryItemAuthority,
    domain::LaundryItem,
    services::{ItemStore, ItemStoreError},
};
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestItemStore = ItemStore<InMemoryItemAuthority>;

/// Scenario world for item lifecycle behaviour tests.
pub struct ItemLifecycleWorld {
    pub authority: Arc<InMemoryItemAuthority>,
    pub store: TestItemStore,
    pub current: Option<LaundryItem>,
    pub last_error: Option<ItemStoreError>,
}

impl ItemLifecycleWorld {
    /// Creates a world backed by an empty authority.
    #[must_use]
    pub fn new() -> Self {
        let authority = Arc::new(InMemoryItemAuthority::new());
        let store = ItemStore::new(Arc::clone(&authority));
        Self {
            authority,
            store,
            current: None,
            last_error: None,
        }
    }

    /// Stores the outcome of a mutation for later assertions.
    pub fn record(&mut self, result: Result<LaundryItem, ItemStoreError>) {
        match result {
            Ok(item) => self.current = Some(item),
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Returns the item the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no item has been created yet.
    pub fn current(&self) -> Result<&LaundryItem, eyre::Report> {
        self.current
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current item in scenario world"))
    }
}

impl Default for ItemLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ItemLifecycleWorld {
    ItemLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
