//! Domain model for the laundry item lifecycle.
//!
//! Items move through a fixed set of statuses and keep an append-only
//! history of every status change. Identifiers and timestamps come from the
//! authority; infrastructure concerns stay outside the domain boundary.

mod error;
mod history;
mod ids;
mod item;
mod label;
mod status;

pub use error::{ItemDomainError, ParseLaundryStatusError};
pub use history::HistoryEntry;
pub use ids::{HistoryEntryId, ItemId};
pub use item::{CREATION_NOTE, ItemDetails, LaundryItem, NewItem, PersistedItemData, StatusChange};
pub use label::{ItemLabel, normalize_optional};
pub use status::LaundryStatus;
