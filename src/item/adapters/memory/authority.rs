//! In-memory authority that assigns identifiers and records history.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::item::{
    domain::{
        HistoryEntryId, ItemDetails, ItemDomainError, ItemId, LaundryItem, NewItem, StatusChange,
    },
    ports::{AuthorityError, AuthorityResult, ItemAuthority},
};

/// Detail returned when a tag identifier is claimed twice.
pub const TAG_IN_USE_DETAIL: &str = "tag_id already in use";

/// Thread-safe in-memory item authority.
///
/// Listings are ordered by item identifier. The authority can be switched
/// offline to exercise the failure paths of its clients.
pub struct InMemoryItemAuthority<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryAuthorityState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryItemAuthority<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> std::fmt::Debug for InMemoryItemAuthority<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryItemAuthority")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct InMemoryAuthorityState {
    items: BTreeMap<ItemId, LaundryItem>,
    next_item_id: i64,
    next_entry_id: i64,
    offline: bool,
    failing_listings: usize,
    request_count: usize,
}

impl Default for InMemoryAuthorityState {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_item_id: 1,
            next_entry_id: 1,
            offline: false,
            failing_listings: 0,
            request_count: 0,
        }
    }
}

impl InMemoryAuthorityState {
    fn allocate_item_id(&mut self) -> Result<ItemId, ItemDomainError> {
        let id = ItemId::new(self.next_item_id)?;
        self.next_item_id += 1;
        Ok(id)
    }

    fn allocate_entry_id(&mut self) -> HistoryEntryId {
        let id = HistoryEntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    fn tag_in_use(&self, tag_id: Option<&str>, except: Option<ItemId>) -> bool {
        tag_id.is_some_and(|tag| {
            self.items
                .values()
                .any(|item| Some(item.id()) != except && item.tag_id() == Some(tag))
        })
    }

    fn item_mut(&mut self, id: ItemId) -> AuthorityResult<&mut LaundryItem> {
        self.items.get_mut(&id).ok_or(AuthorityError::NotFound(id))
    }
}

impl InMemoryItemAuthority<DefaultClock> {
    /// Creates an empty authority backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryItemAuthority<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryItemAuthority<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty authority stamping history with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryAuthorityState::default())),
            clock,
        }
    }

    /// Takes the authority offline or brings it back.
    ///
    /// While offline every request fails with a transport error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_offline(&self, offline: bool) -> AuthorityResult<()> {
        self.write()?.offline = offline;
        Ok(())
    }

    /// Makes the next `count` listing requests fail with a transport error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_next_listings(&self, count: usize) -> AuthorityResult<()> {
        self.write()?.failing_listings = count;
        Ok(())
    }

    /// Returns how many requests the authority has received.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn request_count(&self) -> AuthorityResult<usize> {
        Ok(self.read()?.request_count)
    }

    fn read(&self) -> AuthorityResult<RwLockReadGuard<'_, InMemoryAuthorityState>> {
        self.state
            .read()
            .map_err(|err| AuthorityError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> AuthorityResult<RwLockWriteGuard<'_, InMemoryAuthorityState>> {
        self.state
            .write()
            .map_err(|err| AuthorityError::transport(std::io::Error::other(err.to_string())))
    }

    /// Acquires the state for one request, counting it and honouring the
    /// offline switch.
    fn begin_request(&self) -> AuthorityResult<RwLockWriteGuard<'_, InMemoryAuthorityState>> {
        let mut state = self.write()?;
        state.request_count += 1;
        if state.offline {
            return Err(AuthorityError::transport(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "authority is offline",
            )));
        }
        Ok(state)
    }
}

#[async_trait]
impl<C> ItemAuthority for InMemoryItemAuthority<C>
where
    C: Clock + Send + Sync,
{
    async fn list_items(&self) -> AuthorityResult<Vec<LaundryItem>> {
        let mut state = self.begin_request()?;
        if state.failing_listings > 0 {
            state.failing_listings -= 1;
            return Err(AuthorityError::transport(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "listing request timed out",
            )));
        }
        Ok(state.items.values().cloned().collect())
    }

    async fn fetch_item(&self, id: ItemId) -> AuthorityResult<LaundryItem> {
        let mut state = self.begin_request()?;
        state.item_mut(id).map(|item| item.clone())
    }

    async fn create_item(&self, item: &NewItem) -> AuthorityResult<LaundryItem> {
        let mut state = self.begin_request()?;
        if state.tag_in_use(item.tag_id(), None) {
            return Err(AuthorityError::rejected(TAG_IN_USE_DETAIL));
        }

        let id = state
            .allocate_item_id()
            .map_err(AuthorityError::invalid_record)?;
        let entry_id = state.allocate_entry_id();
        let created = LaundryItem::create(id, item.clone(), entry_id, &*self.clock);
        state.items.insert(id, created.clone());
        Ok(created)
    }

    async fn update_status(
        &self,
        id: ItemId,
        change: &StatusChange,
    ) -> AuthorityResult<LaundryItem> {
        let mut state = self.begin_request()?;
        state.item_mut(id)?;
        let entry_id = state.allocate_entry_id();
        let item = state.item_mut(id)?;
        item.record_status_change(entry_id, change.clone(), &*self.clock);
        Ok(item.clone())
    }

    async fn update_details(
        &self,
        id: ItemId,
        details: &ItemDetails,
    ) -> AuthorityResult<LaundryItem> {
        let mut state = self.begin_request()?;
        state.item_mut(id)?;
        if state.tag_in_use(details.tag_id(), Some(id)) {
            return Err(AuthorityError::rejected(TAG_IN_USE_DETAIL));
        }
        let item = state.item_mut(id)?;
        item.apply_details(details.clone());
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> AuthorityResult<()> {
        let mut state = self.begin_request()?;
        state
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(AuthorityError::NotFound(id))
    }
}
