//! Shared world state for board query BDD scenarios.

use std::sync::Arc;

use laundry_ai::item::{
    adapters::memory::InMemoryItemAuthority,
    domain::{LaundryItem, LaundryStatus},
    services::ItemStore,
    view::{ItemQuery, ItemSelection, ItemView},
};
use rstest::fixture;

/// Scenario world for board query behaviour tests.
pub struct BoardQueryWorld {
    pub store: ItemStore<InMemoryItemAuthority>,
    pub snapshot: Vec<LaundryItem>,
    pub query: ItemQuery,
}

impl BoardQueryWorld {
    /// Creates a world with an empty board and no query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(Arc::new(InMemoryItemAuthority::new())),
            snapshot: Vec::new(),
            query: ItemQuery::default(),
        }
    }

    /// Returns the labels shown in the `status` column for the current query.
    #[must_use]
    pub fn column(&self, status: LaundryStatus) -> Vec<String> {
        let view = ItemView::derive(&self.snapshot, &self.query, &ItemSelection::new());
        view.buckets()
            .get(status)
            .iter()
            .map(|item| item.label().to_string())
            .collect()
    }

    /// Returns the number of items matching the current query.
    #[must_use]
    pub fn filtered_total(&self) -> usize {
        ItemView::derive(&self.snapshot, &self.query, &ItemSelection::new()).total_filtered()
    }
}

impl Default for BoardQueryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardQueryWorld {
    BoardQueryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
