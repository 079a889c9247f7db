//! HTTP adapter for the remote laundry authority.

mod models;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::api::{ApiClient, ApiError};
use crate::item::{
    domain::{ItemDetails, ItemId, LaundryItem, NewItem, StatusChange},
    ports::{AuthorityError, AuthorityResult, ItemAuthority},
};
use models::{CreateItemBody, DetailsPatchBody, ItemRecord, StatusPatchBody};

const ITEMS_PATH: &str = "items";

/// Item authority reached over the JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpItemAuthority {
    client: ApiClient,
}

impl HttpItemAuthority {
    /// Creates an authority adapter using `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn send_item<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        id: Option<ItemId>,
    ) -> AuthorityResult<LaundryItem>
    where
        B: serde::Serialize + Sync,
    {
        let record: ItemRecord = self
            .client
            .send_json(method, path, body)
            .await
            .map_err(|err| map_api_error(err, id))?;
        into_item(record)
    }
}

fn item_path(id: ItemId) -> String {
    format!("{ITEMS_PATH}/{id}")
}

fn into_item(record: ItemRecord) -> AuthorityResult<LaundryItem> {
    LaundryItem::try_from(record).map_err(AuthorityError::invalid_record)
}

/// Maps API failures onto the authority error taxonomy.
///
/// A 404 for a known item id is a not-found condition; any answer carrying a
/// `detail` message is a rejection surfaced verbatim; undecodable bodies are
/// invalid records; everything else is a transport failure.
fn map_api_error(err: ApiError, id: Option<ItemId>) -> AuthorityError {
    if let (Some(StatusCode::NOT_FOUND), Some(item_id)) = (err.status(), id) {
        return AuthorityError::NotFound(item_id);
    }
    if let Some(detail) = err.detail() {
        return AuthorityError::rejected(detail);
    }
    match err {
        ApiError::Decode { .. } => AuthorityError::invalid_record(err),
        other => AuthorityError::transport(other),
    }
}

#[async_trait]
impl ItemAuthority for HttpItemAuthority {
    async fn list_items(&self) -> AuthorityResult<Vec<LaundryItem>> {
        let records: Vec<ItemRecord> = self
            .client
            .get_json(ITEMS_PATH)
            .await
            .map_err(|err| map_api_error(err, None))?;
        records.into_iter().map(into_item).collect()
    }

    async fn fetch_item(&self, id: ItemId) -> AuthorityResult<LaundryItem> {
        let record: ItemRecord = self
            .client
            .get_json(&item_path(id))
            .await
            .map_err(|err| map_api_error(err, Some(id)))?;
        into_item(record)
    }

    async fn create_item(&self, item: &NewItem) -> AuthorityResult<LaundryItem> {
        self.send_item(Method::POST, ITEMS_PATH, &CreateItemBody::from(item), None)
            .await
    }

    async fn update_status(
        &self,
        id: ItemId,
        change: &StatusChange,
    ) -> AuthorityResult<LaundryItem> {
        self.send_item(
            Method::PATCH,
            &item_path(id),
            &StatusPatchBody::from(change),
            Some(id),
        )
        .await
    }

    async fn update_details(
        &self,
        id: ItemId,
        details: &ItemDetails,
    ) -> AuthorityResult<LaundryItem> {
        self.send_item(
            Method::PATCH,
            &item_path(id),
            &DetailsPatchBody::from(details),
            Some(id),
        )
        .await
    }

    async fn delete_item(&self, id: ItemId) -> AuthorityResult<()> {
        self.client
            .delete(&item_path(id))
            .await
            .map_err(|err| map_api_error(err, Some(id)))
    }
}
