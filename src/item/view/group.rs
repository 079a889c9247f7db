//! Grouping of items into one bucket per status.

use crate::item::domain::{LaundryItem, LaundryStatus};

/// Items partitioned by status, with a bucket for every status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBuckets<'a> {
    buckets: [Vec<&'a LaundryItem>; LaundryStatus::ALL.len()],
}

impl<'a> StatusBuckets<'a> {
    /// Returns the items with `status`, in input order.
    #[must_use]
    pub fn get(&self, status: LaundryStatus) -> &[&'a LaundryItem] {
        self.buckets
            .get(status.position())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over every status with its bucket, in status order.
    pub fn iter(&self) -> impl Iterator<Item = (LaundryStatus, &[&'a LaundryItem])> + '_ {
        LaundryStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    /// Returns the number of items across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Groups `items` by status; empty statuses keep an empty bucket.
#[must_use]
pub fn group_by_status<'a>(items: impl IntoIterator<Item = &'a LaundryItem>) -> StatusBuckets<'a> {
    let mut grouped = StatusBuckets::default();
    for item in items {
        if let Some(bucket) = grouped.buckets.get_mut(item.status().position()) {
            bucket.push(item);
        }
    }
    grouped
}
