//! Typed REST client for the admin backend.
//!
//! [`Transport`] is the seam between the typed layer and the wire: the
//! production implementation is [`http::HttpTransport`], tests script their
//! own. [`ApiClient`] layers the collection contract on top (paths, query
//! strings, envelope parsing) so callers only ever see domain types.

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

use std::sync::Arc;

use serde_json::Value;

pub use errors::{ApiError, ApiResult};

use crate::domain::Resource;
use crate::envelope::{ItemEnvelope, ListEnvelope, PagedResult};
use crate::query::{QueryRequest, build_query};

/// Wire-level operations against the backend. Implementations own
/// authentication; the typed layer above never sees a token. An empty
/// `query` means the request carries no query string.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str, query: &str) -> ApiResult<Value>;
    fn post(&self, path: &str, body: Value) -> ApiResult<Value>;
    fn put(&self, path: &str, body: Value) -> ApiResult<Value>;
    fn delete(&self, path: &str) -> ApiResult<()>;
}

/// Typed CRUD client over a [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches one page of `R` rows for the given grid state.
    pub fn list<R: Resource>(&self, request: &QueryRequest) -> ApiResult<PagedResult<R>> {
        let query = build_query::<R>(request);
        let raw = self.transport.get(R::COLLECTION, &query)?;
        let envelope: ListEnvelope<R> = serde_json::from_value(raw).map_err(ApiError::decode)?;
        envelope.into_paged()
    }

    /// Fetches a single entity; a 404 is `Ok(None)`.
    pub fn get<R: Resource>(&self, id: R::Id) -> ApiResult<Option<R>> {
        let path = format!("{}/{id}", R::COLLECTION);
        match self.transport.get(&path, "") {
            Ok(raw) => {
                let envelope: ItemEnvelope<R> =
                    serde_json::from_value(raw).map_err(ApiError::decode)?;
                envelope.into_item().map(Some)
            }
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Creates an entity and returns the backend's version of it.
    pub fn create<R: Resource>(&self, new: &R::New) -> ApiResult<R> {
        let body = serde_json::to_value(new).map_err(ApiError::encode)?;
        let raw = self.transport.post(R::COLLECTION, body)?;
        let envelope: ItemEnvelope<R> = serde_json::from_value(raw).map_err(ApiError::decode)?;
        envelope.into_item()
    }

    /// Replaces an entity with the given full body.
    pub fn update<R: Resource>(&self, id: R::Id, update: &R::Update) -> ApiResult<R> {
        let body = serde_json::to_value(update).map_err(ApiError::encode)?;
        let raw = self.transport.put(&format!("{}/{id}", R::COLLECTION), body)?;
        let envelope: ItemEnvelope<R> = serde_json::from_value(raw).map_err(ApiError::decode)?;
        envelope.into_item()
    }

    /// Deletes an entity.
    pub fn delete<R: Resource>(&self, id: R::Id) -> ApiResult<()> {
        self.transport.delete(&format!("{}/{id}", R::COLLECTION))
    }
}
