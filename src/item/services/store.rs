//! Item store: a cache of the authority's listing that only a refresh writes.
//!
//! Mutations go to the authority first and are followed by a full refresh, so
//! the snapshot never holds locally invented state. Every refresh takes a
//! generation number when it is issued, and its response is applied only if
//! no later refresh has been issued in the meantime.

use super::{CreateItemRequest, UpdateDetailsRequest, UpdateStatusRequest};
use crate::item::{
    domain::{ItemDomainError, ItemId, LaundryItem},
    ports::{AuthorityError, ItemAuthority},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// User action that reached the authority and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    /// Registering a new item.
    Create,
    /// Changing status or details of an item.
    Update,
    /// Reading a single item.
    Load,
}

impl StoreAction {
    /// Returns the verb used in user-facing messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by [`ItemStore`] operations.
#[derive(Debug, Clone, Error)]
pub enum ItemStoreError {
    /// Input was rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ItemDomainError),

    /// The authority call behind `action` failed.
    #[error("failed to {action} item: {source}")]
    Authority {
        /// Action that failed.
        action: StoreAction,
        /// Authority failure.
        #[source]
        source: AuthorityError,
    },
}

impl ItemStoreError {
    const fn authority(action: StoreAction, source: AuthorityError) -> Self {
        Self::Authority { action, source }
    }

    /// Returns the message shown to the user next to the failed action.
    ///
    /// Rejection details from the authority are passed through verbatim;
    /// transport failures collapse into a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Authority {
                source: AuthorityError::Rejected { detail },
                ..
            } => detail.clone(),
            Self::Authority {
                source: AuthorityError::NotFound(_),
                ..
            } => "Item not found".to_owned(),
            Self::Authority { action, .. } => format!("Failed to {action} item"),
        }
    }
}

/// Result type for item store operations.
pub type ItemStoreResult<T> = Result<T, ItemStoreError>;

#[derive(Debug, Default)]
struct Snapshot {
    items: Vec<LaundryItem>,
    issued_generation: u64,
    last_refresh_failure: Option<AuthorityError>,
}

/// Client-side cache of the authority's items.
pub struct ItemStore<A>
where
    A: ItemAuthority,
{
    authority: Arc<A>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl<A> Clone for ItemStore<A>
where
    A: ItemAuthority,
{
    fn clone(&self) -> Self {
        Self {
            authority: Arc::clone(&self.authority),
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}

impl<A> fmt::Debug for ItemStore<A>
where
    A: ItemAuthority,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.read_snapshot();
        f.debug_struct("ItemStore")
            .field("items", &snapshot.items.len())
            .field("issued_generation", &snapshot.issued_generation)
            .finish_non_exhaustive()
    }
}

impl<A> ItemStore<A>
where
    A: ItemAuthority,
{
    /// Creates an empty store backed by `authority`.
    #[must_use]
    pub fn new(authority: Arc<A>) -> Self {
        Self {
            authority,
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
        }
    }

    /// Replaces the snapshot with the authority's current listing.
    ///
    /// Never fails: a failed listing empties the snapshot and is kept for
    /// [`ItemStore::refresh_failure`]. A response overtaken by a later
    /// refresh is discarded. Returns the snapshot after the call.
    pub async fn refresh(&self) -> Vec<LaundryItem> {
        let generation = {
            let mut snapshot = self.write_snapshot();
            snapshot.issued_generation = snapshot.issued_generation.wrapping_add(1);
            snapshot.issued_generation
        };

        let listing = self.authority.list_items().await;

        let mut snapshot = self.write_snapshot();
        if generation != snapshot.issued_generation {
            debug!(
                generation,
                latest = snapshot.issued_generation,
                "discarding stale item listing"
            );
            return snapshot.items.clone();
        }
        match listing {
            Ok(items) => {
                snapshot.items = dedupe_by_id(items);
                snapshot.last_refresh_failure = None;
                debug!(count = snapshot.items.len(), "item snapshot refreshed");
            }
            Err(err) => {
                warn!(error = %err, "item refresh failed, snapshot cleared");
                snapshot.items.clear();
                snapshot.last_refresh_failure = Some(err);
            }
        }
        snapshot.items.clone()
    }

    /// Registers a new item, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Validation`] without contacting the
    /// authority when the label is blank, or [`ItemStoreError::Authority`]
    /// when the authority refuses or cannot be reached.
    pub async fn create(&self, request: CreateItemRequest) -> ItemStoreResult<LaundryItem> {
        let new_item = request.into_new_item()?;
        let created = self
            .authority
            .create_item(&new_item)
            .await
            .map_err(|err| failed(StoreAction::Create, err))?;
        info!(item_id = %created.id(), label = %created.label(), "item created");
        self.refresh().await;
        Ok(created)
    }

    /// Changes an item's status, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Authority`] when the item is unknown or the
    /// authority cannot be reached.
    pub async fn update_status(&self, request: UpdateStatusRequest) -> ItemStoreResult<LaundryItem> {
        let id = request.id();
        let change = request.into_change();
        let updated = self
            .authority
            .update_status(id, &change)
            .await
            .map_err(|err| failed(StoreAction::Update, err))?;
        info!(item_id = %id, status = %updated.status(), "item status updated");
        self.refresh().await;
        Ok(updated)
    }

    /// Replaces an item's descriptive attributes, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Validation`] without contacting the
    /// authority when the label is blank, or [`ItemStoreError::Authority`]
    /// when the item is unknown, the tag is taken, or the authority cannot
    /// be reached.
    pub async fn update_details(
        &self,
        request: UpdateDetailsRequest,
    ) -> ItemStoreResult<LaundryItem> {
        let id = request.id();
        let details = request.into_details()?;
        let updated = self
            .authority
            .update_details(id, &details)
            .await
            .map_err(|err| failed(StoreAction::Update, err))?;
        info!(item_id = %id, "item details updated");
        self.refresh().await;
        Ok(updated)
    }

    /// Deletes an item and refreshes whatever the outcome.
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn delete(&self, id: ItemId) {
        match self.authority.delete_item(id).await {
            Ok(()) => info!(item_id = %id, "item deleted"),
            Err(err) => warn!(item_id = %id, error = %err, "item delete failed"),
        }
        self.refresh().await;
    }

    /// Reads one item with its history straight from the authority.
    ///
    /// The snapshot is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Authority`] when the item is unknown or the
    /// authority cannot be reached.
    pub async fn fetch(&self, id: ItemId) -> ItemStoreResult<LaundryItem> {
        self.authority
            .fetch_item(id)
            .await
            .map_err(|err| failed(StoreAction::Load, err))
    }

    /// Returns a copy of the current snapshot in authority order.
    #[must_use]
    pub fn items(&self) -> Vec<LaundryItem> {
        self.read_snapshot().items.clone()
    }

    /// Returns the cached item with `id`, if present.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<LaundryItem> {
        self.read_snapshot()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Returns the failure of the last applied refresh, if it failed.
    #[must_use]
    pub fn refresh_failure(&self) -> Option<AuthorityError> {
        self.read_snapshot().last_refresh_failure.clone()
    }

    fn read_snapshot(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_snapshot(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn failed(action: StoreAction, err: AuthorityError) -> ItemStoreError {
    warn!(action = %action, error = %err, "item request failed");
    ItemStoreError::authority(action, err)
}

/// Collapses duplicate ids, keeping the first position and the last record.
fn dedupe_by_id(items: Vec<LaundryItem>) -> Vec<LaundryItem> {
    let mut positions: HashMap<ItemId, usize> = HashMap::with_capacity(items.len());
    let mut unique: Vec<LaundryItem> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(slot) = positions
            .get(&item.id())
            .and_then(|&index| unique.get_mut(index))
        {
            *slot = item;
            continue;
        }
        positions.insert(item.id(), unique.len());
        unique.push(item);
    }
    unique
}
