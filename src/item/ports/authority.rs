//! Authority port: the remote service that owns durable item state.

use crate::item::domain::{ItemDetails, ItemId, LaundryItem, NewItem, StatusChange};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authority operations.
pub type AuthorityResult<T> = Result<T, AuthorityError>;

/// Item persistence contract fulfilled by the authority.
///
/// The authority assigns identifiers, appends history entries and is the
/// single source of truth; clients only cache what it returns.
#[async_trait]
pub trait ItemAuthority: Send + Sync {
    /// Returns every known item, each with its full history.
    async fn list_items(&self) -> AuthorityResult<Vec<LaundryItem>>;

    /// Returns one item with its full history.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotFound`] when the item does not exist.
    async fn fetch_item(&self, id: ItemId) -> AuthorityResult<LaundryItem>;

    /// Registers a new item and returns it with its first history entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::Rejected`] when the authority refuses the
    /// payload, for example because the tag is already in use.
    async fn create_item(&self, item: &NewItem) -> AuthorityResult<LaundryItem>;

    /// Changes the status of an item, appending one history entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotFound`] when the item does not exist.
    async fn update_status(
        &self,
        id: ItemId,
        change: &StatusChange,
    ) -> AuthorityResult<LaundryItem>;

    /// Replaces the descriptive attributes of an item.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotFound`] when the item does not exist or
    /// [`AuthorityError::Rejected`] when the new tag is already in use.
    async fn update_details(
        &self,
        id: ItemId,
        details: &ItemDetails,
    ) -> AuthorityResult<LaundryItem>;

    /// Removes an item.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotFound`] when the item does not exist.
    async fn delete_item(&self, id: ItemId) -> AuthorityResult<()>;
}

/// Errors returned by authority implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthorityError {
    /// The item does not exist at the authority.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The authority refused the request with a human-readable detail.
    #[error("request rejected: {detail}")]
    Rejected {
        /// Detail message supplied by the authority.
        detail: String,
    },

    /// The authority answered with data that does not form valid items.
    #[error("invalid authority record: {0}")]
    InvalidRecord(Arc<dyn std::error::Error + Send + Sync>),

    /// The authority could not be reached or failed without detail.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthorityError {
    /// Creates a rejection carrying the authority's detail message.
    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::Rejected {
            detail: detail.into(),
        }
    }

    /// Wraps a record decoding or validation error.
    pub fn invalid_record(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidRecord(Arc::new(err))
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
