//! Identifier types for the laundry item domain.
//!
//! Identifiers are assigned by the authority; the client never invents them.

use super::ItemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority-assigned identifier of a laundry item.
///
/// Deserialization applies the same positivity check as [`ItemId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ItemId(i64);

impl ItemId {
    /// Creates a validated item identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::InvalidItemId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, ItemDomainError> {
        if value <= 0 {
            return Err(ItemDomainError::InvalidItemId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ItemId {
    type Error = ItemDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authority-assigned identifier of a single history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntryId(i64);

impl HistoryEntryId {
    /// Wraps a raw history entry identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
