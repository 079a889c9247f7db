//! Item selection used to scope bulk actions.

use crate::item::domain::{ItemId, LaundryItem};
use std::collections::BTreeSet;

/// Set of selected item identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection(BTreeSet<ItemId>);

impl ItemSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds `id`; returns `false` if it was already selected.
    pub fn insert(&mut self, id: ItemId) -> bool {
        self.0.insert(id)
    }

    /// Removes `id`; returns `false` if it was not selected.
    pub fn remove(&mut self, id: ItemId) -> bool {
        self.0.remove(&id)
    }

    /// Flips the selection state of `id` and returns the new state.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id)
        }
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops ids that no longer appear in `items`, e.g. after a refresh.
    pub fn retain_known(&mut self, items: &[LaundryItem]) {
        let known: BTreeSet<ItemId> = items.iter().map(LaundryItem::id).collect();
        self.0.retain(|id| known.contains(id));
    }
}

impl FromIterator<ItemId> for ItemSelection {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns the selected items, in input order.
#[must_use]
pub fn select<'a>(items: &'a [LaundryItem], selection: &ItemSelection) -> Vec<&'a LaundryItem> {
    items
        .iter()
        .filter(|item| selection.contains(item.id()))
        .collect()
}
