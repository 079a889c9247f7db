//! Wire records exchanged with the remote authority.

use crate::item::domain::{
    HistoryEntry, HistoryEntryId, ItemDetails, ItemDomainError, ItemId, ItemLabel, LaundryItem,
    LaundryStatus, NewItem, PersistedItemData, StatusChange,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Item as listed by the authority.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    id: i64,
    label: String,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    tag_id: Option<String>,
    status: LaundryStatus,
    #[serde(default)]
    history: Vec<HistoryRecord>,
}

/// History entry as listed by the authority.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    id: i64,
    status: LaundryStatus,
    #[serde(default)]
    note: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    created_at: DateTime<Utc>,
}

impl TryFrom<ItemRecord> for LaundryItem {
    type Error = ItemDomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let history = record
            .history
            .into_iter()
            .map(|entry| {
                HistoryEntry::new(
                    HistoryEntryId::new(entry.id),
                    entry.status,
                    entry.note,
                    entry.created_at,
                )
            })
            .collect();

        Self::from_persisted(PersistedItemData {
            id: ItemId::new(record.id)?,
            label: ItemLabel::new(record.label)?,
            material: record.material,
            color: record.color,
            tag_id: record.tag_id,
            status: record.status,
            history,
        })
    }
}

/// Body of a create request; absent attributes are omitted.
#[derive(Debug, Serialize)]
pub struct CreateItemBody<'a> {
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    material: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_id: Option<&'a str>,
    status: LaundryStatus,
}

impl<'a> From<&'a NewItem> for CreateItemBody<'a> {
    fn from(item: &'a NewItem) -> Self {
        Self {
            label: item.label().as_str(),
            material: item.material(),
            color: item.color(),
            tag_id: item.tag_id(),
            status: item.status(),
        }
    }
}

/// Body of a status-change request.
#[derive(Debug, Serialize)]
pub struct StatusPatchBody<'a> {
    status: LaundryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

impl<'a> From<&'a StatusChange> for StatusPatchBody<'a> {
    fn from(change: &'a StatusChange) -> Self {
        Self {
            status: change.status(),
            note: change.note(),
        }
    }
}

/// Body of a details edit; absent attributes are sent as `null` to clear
/// them.
#[derive(Debug, Serialize)]
pub struct DetailsPatchBody<'a> {
    label: &'a str,
    material: Option<&'a str>,
    color: Option<&'a str>,
    tag_id: Option<&'a str>,
}

impl<'a> From<&'a ItemDetails> for DetailsPatchBody<'a> {
    fn from(details: &'a ItemDetails) -> Self {
        Self {
            label: details.label().as_str(),
            material: details.material(),
            color: details.color(),
            tag_id: details.tag_id(),
        }
    }
}

/// Accepts RFC 3339 timestamps and offset-less ones, which are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid history timestamp '{raw}'"))
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
