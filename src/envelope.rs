//! Backend response envelopes and their grid-side form.
//!
//! Every list endpoint answers with `{ data, pagedResult, success, message }`
//! and every detail/mutation endpoint with `{ data, success, message }`. The
//! conversions here are the inverse half of the query translator: 1-based
//! `currentPage` becomes the grid's 0-based page, `rowCount` becomes
//! `total_count`, and a missing `data` or `pagedResult` member raises a typed
//! [`ApiError::MalformedResponse`] instead of rendering a silently empty grid.

use serde::Deserialize;

use crate::client::ApiError;

/// Pagination metadata as sent by the backend. `current_page` is 1-based.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedMeta {
    pub current_page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub row_count: u64,
    #[serde(default)]
    pub first_row_on_page: Option<u64>,
    #[serde(default)]
    pub last_row_on_page: Option<u64>,
}

fn success_by_default() -> bool {
    true
}

/// Raw wire envelope of a list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
    pub paged_result: Option<PagedMeta>,
    #[serde(default = "success_by_default")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw wire envelope of a detail or mutation endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEnvelope<T> {
    pub data: Option<T>,
    #[serde(default = "success_by_default")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of rows in grid terms: `page` is 0-based, `total_count` spans all
/// pages. Replaces the previous result wholesale; there is no merging.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl<T> ListEnvelope<T> {
    /// Converts the wire envelope into a [`PagedResult`], raising a typed
    /// error when the backend rejected the request or omitted a member.
    pub fn into_paged(self) -> Result<PagedResult<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Backend(
                self.message
                    .unwrap_or_else(|| "request rejected without a message".to_string()),
            ));
        }
        let items = self
            .data
            .ok_or_else(|| ApiError::MalformedResponse("envelope is missing `data`".to_string()))?;
        let meta = self.paged_result.ok_or_else(|| {
            ApiError::MalformedResponse("envelope is missing `pagedResult`".to_string())
        })?;

        Ok(PagedResult {
            items,
            total_count: meta.row_count,
            page: meta.current_page.saturating_sub(1),
            page_size: meta.page_size,
            page_count: meta.page_count,
        })
    }
}

impl<T> ItemEnvelope<T> {
    /// Unwraps the entity from a detail/mutation envelope.
    pub fn into_item(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Backend(
                self.message
                    .unwrap_or_else(|| "request rejected without a message".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::MalformedResponse("envelope is missing `data`".to_string()))
    }
}
