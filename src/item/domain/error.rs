//! Error types for laundry item domain validation and parsing.

use super::{HistoryEntryId, ItemId};
use thiserror::Error;

/// Errors returned while constructing laundry item domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemDomainError {
    /// The item label is empty after trimming.
    #[error("Label is required")]
    EmptyLabel,

    /// The item identifier is not a positive integer.
    #[error("invalid item identifier {0}, expected a positive integer")]
    InvalidItemId(i64),

    /// A persisted item arrived without any history entries.
    #[error("item {0} has no history entries")]
    EmptyHistory(ItemId),

    /// A persisted history entry is older than the entry before it.
    #[error("history entry {entry_id} of item {item_id} is out of chronological order")]
    HistoryOutOfOrder {
        /// Item owning the history.
        item_id: ItemId,
        /// First entry found out of order.
        entry_id: HistoryEntryId,
    },
}

/// Error returned while parsing laundry statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown laundry status: {0}")]
pub struct ParseLaundryStatusError(pub String);
