//! Service layer keeping the client-side item snapshot in step with the
//! authority.

mod requests;
mod store;

pub use requests::{CreateItemRequest, UpdateDetailsRequest, UpdateStatusRequest};
pub use store::{ItemStore, ItemStoreError, ItemStoreResult, StoreAction};
