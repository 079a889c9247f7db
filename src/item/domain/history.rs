//! History log entries recorded on every status change.

use super::{HistoryEntryId, LaundryStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable record in an item's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: HistoryEntryId,
    status: LaundryStatus,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates a history entry.
    ///
    /// Blank notes are stored as absent.
    #[must_use]
    pub fn new(
        id: HistoryEntryId,
        status: LaundryStatus,
        note: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            status,
            note: super::normalize_optional(note),
            created_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> HistoryEntryId {
        self.id
    }

    /// Returns the status recorded by this entry.
    #[must_use]
    pub const fn status(&self) -> LaundryStatus {
        self.status
    }

    /// Returns the note explaining the transition, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the authority timestamp of the entry.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
