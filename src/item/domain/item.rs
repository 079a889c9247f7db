//! Laundry item aggregate root and the value objects used to change it.

use super::{
    HistoryEntry, HistoryEntryId, ItemDomainError, ItemId, ItemLabel, LaundryStatus,
    normalize_optional,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Note attached to the history entry produced by item creation.
pub const CREATION_NOTE: &str = "created";

/// Laundry item aggregate root.
///
/// A constructed item always carries at least one history entry, and its
/// entries are in non-decreasing timestamp order. Deserialization goes
/// through [`LaundryItem::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedItemData")]
pub struct LaundryItem {
    id: ItemId,
    label: ItemLabel,
    material: Option<String>,
    color: Option<String>,
    tag_id: Option<String>,
    status: LaundryStatus,
    history: Vec<HistoryEntry>,
}

/// Parameter object for reconstructing an item reported by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedItemData {
    /// Authority-assigned identifier.
    pub id: ItemId,
    /// Item label.
    pub label: ItemLabel,
    /// Fabric, if known.
    pub material: Option<String>,
    /// Colour, if known.
    pub color: Option<String>,
    /// Physical tag identifier, if known.
    pub tag_id: Option<String>,
    /// Current lifecycle status.
    pub status: LaundryStatus,
    /// Full status history, oldest first.
    pub history: Vec<HistoryEntry>,
}

impl TryFrom<PersistedItemData> for LaundryItem {
    type Error = ItemDomainError;

    fn try_from(data: PersistedItemData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}

impl LaundryItem {
    /// Creates a freshly registered item with its initial history entry.
    ///
    /// Used by authorities that assign identifiers; clients obtain items from
    /// an authority instead of calling this directly.
    #[must_use]
    pub fn create(
        id: ItemId,
        new_item: NewItem,
        entry_id: HistoryEntryId,
        clock: &impl Clock,
    ) -> Self {
        let NewItem {
            label,
            material,
            color,
            tag_id,
            status,
        } = new_item;
        let first_entry = HistoryEntry::new(
            entry_id,
            status,
            Some(CREATION_NOTE.to_owned()),
            clock.utc(),
        );

        Self {
            id,
            label,
            material,
            color,
            tag_id,
            status,
            history: vec![first_entry],
        }
    }

    /// Reconstructs an item from authority data.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::EmptyHistory`] when the history is empty or
    /// [`ItemDomainError::HistoryOutOfOrder`] when an entry is older than its
    /// predecessor.
    pub fn from_persisted(data: PersistedItemData) -> Result<Self, ItemDomainError> {
        if data.history.is_empty() {
            return Err(ItemDomainError::EmptyHistory(data.id));
        }
        let out_of_order = data
            .history
            .windows(2)
            .find_map(|pair| match pair {
                [earlier, later] if later.created_at() < earlier.created_at() => Some(later.id()),
                _ => None,
            });
        if let Some(entry_id) = out_of_order {
            return Err(ItemDomainError::HistoryOutOfOrder {
                item_id: data.id,
                entry_id,
            });
        }

        Ok(Self {
            id: data.id,
            label: data.label,
            material: normalize_optional(data.material),
            color: normalize_optional(data.color),
            tag_id: normalize_optional(data.tag_id),
            status: data.status,
            history: data.history,
        })
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item label.
    #[must_use]
    pub const fn label(&self) -> &ItemLabel {
        &self.label
    }

    /// Returns the material, if known.
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Returns the colour, if known.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the physical tag identifier, if known.
    #[must_use]
    pub fn tag_id(&self) -> Option<&str> {
        self.tag_id.as_deref()
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> LaundryStatus {
        self.status
    }

    /// Returns the status history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the most recent history entry.
    #[must_use]
    pub fn latest_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// Sets a new status and appends the matching history entry.
    ///
    /// Any status may follow any other. The entry timestamp never precedes
    /// the previous entry, even if the clock moved backwards.
    pub fn record_status_change(
        &mut self,
        entry_id: HistoryEntryId,
        change: StatusChange,
        clock: &impl Clock,
    ) {
        let now = clock.utc();
        let created_at = self
            .latest_entry()
            .map_or(now, |latest| latest.created_at().max(now));
        let StatusChange { status, note } = change;
        self.status = status;
        self.history
            .push(HistoryEntry::new(entry_id, status, note, created_at));
    }

    /// Replaces the descriptive attributes of the item.
    ///
    /// Status and history are untouched.
    pub fn apply_details(&mut self, details: ItemDetails) {
        let ItemDetails {
            label,
            material,
            color,
            tag_id,
        } = details;
        self.label = label;
        self.material = material;
        self.color = color;
        self.tag_id = tag_id;
    }
}

/// Validated payload for registering a new item with the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    label: ItemLabel,
    material: Option<String>,
    color: Option<String>,
    tag_id: Option<String>,
    status: LaundryStatus,
}

impl NewItem {
    /// Creates a payload with the default `dirty` status.
    #[must_use]
    pub fn new(label: ItemLabel) -> Self {
        Self {
            label,
            material: None,
            color: None,
            tag_id: None,
            status: LaundryStatus::default(),
        }
    }

    /// Sets the material; blank text is dropped.
    #[must_use]
    pub fn with_material(mut self, material: Option<String>) -> Self {
        self.material = normalize_optional(material);
        self
    }

    /// Sets the colour; blank text is dropped.
    #[must_use]
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = normalize_optional(color);
        self
    }

    /// Sets the tag identifier; blank text is dropped.
    #[must_use]
    pub fn with_tag_id(mut self, tag_id: Option<String>) -> Self {
        self.tag_id = normalize_optional(tag_id);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: LaundryStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &ItemLabel {
        &self.label
    }

    /// Returns the material, if provided.
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Returns the colour, if provided.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the tag identifier, if provided.
    #[must_use]
    pub fn tag_id(&self) -> Option<&str> {
        self.tag_id.as_deref()
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> LaundryStatus {
        self.status
    }
}

/// Replacement descriptive attributes for an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    label: ItemLabel,
    material: Option<String>,
    color: Option<String>,
    tag_id: Option<String>,
}

impl ItemDetails {
    /// Creates details with only a label; other attributes become unknown.
    #[must_use]
    pub const fn new(label: ItemLabel) -> Self {
        Self {
            label,
            material: None,
            color: None,
            tag_id: None,
        }
    }

    /// Sets the material; blank text clears it.
    #[must_use]
    pub fn with_material(mut self, material: Option<String>) -> Self {
        self.material = normalize_optional(material);
        self
    }

    /// Sets the colour; blank text clears it.
    #[must_use]
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = normalize_optional(color);
        self
    }

    /// Sets the tag identifier; blank text clears it.
    #[must_use]
    pub fn with_tag_id(mut self, tag_id: Option<String>) -> Self {
        self.tag_id = normalize_optional(tag_id);
        self
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &ItemLabel {
        &self.label
    }

    /// Returns the material, if any.
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Returns the colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the tag identifier, if any.
    #[must_use]
    pub fn tag_id(&self) -> Option<&str> {
        self.tag_id.as_deref()
    }
}

/// Requested status transition with an optional explanatory note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    status: LaundryStatus,
    note: Option<String>,
}

impl StatusChange {
    /// Creates a transition to `status` without a note.
    #[must_use]
    pub const fn new(status: LaundryStatus) -> Self {
        Self { status, note: None }
    }

    /// Attaches a note; blank text is dropped.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = normalize_optional(Some(note.into()));
        self
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> LaundryStatus {
        self.status
    }

    /// Returns the note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
