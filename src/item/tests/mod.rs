//! Unit tests for the laundry item lifecycle.


use crate::item::domain::{
    CREATION_NOTE, HistoryEntry, HistoryEntryId, ItemId, ItemLabel, LaundryItem, LaundryStatus,
    PersistedItemData,
};
use chrono::Utc;

/// Builds a persisted item with a single creation entry.
pub(super) fn sample_item(id: i64, label: &str, status: LaundryStatus) -> LaundryItem {
    described_item(id, label, status, [None, None, None])
}

/// Builds a persisted item with `[material, color, tag_id]` attributes.
pub(super) fn described_item(
    id: i64,
    label: &str,
    status: LaundryStatus,
    [material, color, tag_id]: [Option<&str>; 3],
) -> LaundryItem {
    LaundryItem::from_persisted(PersistedItemData {
        id: ItemId::new(id).expect("positive item id"),
        label: ItemLabel::new(label).expect("non-empty label"),
        material: material.map(str::to_owned),
        color: color.map(str::to_owned),
        tag_id: tag_id.map(str::to_owned),
        status,
        history: vec![HistoryEntry::new(
            HistoryEntryId::new(id),
            status,
            Some(CREATION_NOTE.to_owned()),
            Utc::now(),
        )],
    })
    .expect("valid persisted item")
}
