//! Read-only derived views over an item snapshot.
//!
//! Everything here is a pure function of `(items, query, selection)` and is
//! recomputed in full whenever any input changes.

mod filter;
mod group;
mod selection;

pub use filter::{ItemQuery, filter};
pub use group::{StatusBuckets, group_by_status};
pub use selection::{ItemSelection, select};

use crate::item::domain::LaundryItem;

/// Render-ready view of a snapshot for one query and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    buckets: StatusBuckets<'a>,
    selected: Vec<&'a LaundryItem>,
}

impl<'a> ItemView<'a> {
    /// Derives the grouped, filtered view and the selected items.
    ///
    /// Selection is resolved against the whole snapshot so that selected
    /// items stay reachable while a query hides them.
    #[must_use]
    pub fn derive(items: &'a [LaundryItem], query: &ItemQuery, selection: &ItemSelection) -> Self {
        let matching = filter(items, query);
        Self {
            buckets: group_by_status(matching),
            selected: select(items, selection),
        }
    }

    /// Returns the per-status buckets of matching items.
    #[must_use]
    pub const fn buckets(&self) -> &StatusBuckets<'a> {
        &self.buckets
    }

    /// Returns the selected items in snapshot order.
    #[must_use]
    pub fn selected(&self) -> &[&'a LaundryItem] {
        &self.selected
    }

    /// Returns the number of items matching the query.
    #[must_use]
    pub fn total_filtered(&self) -> usize {
        self.buckets.total()
    }
}
