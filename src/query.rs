//! Grid state and its translation into backend query parameters.
//!
//! The grid is 0-based, the backend is 1-based; [`build_query`] is the single
//! place that conversion happens. The rest of the mapping is mechanical:
//! one optional sort key becomes the combined `Order` parameter, filters are
//! passed through the entity's allow-list, and free-text search is folded
//! onto the entity's designated searchable field.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::Resource;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire form used inside the `Order` parameter.
    pub fn as_wire(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A single sort key. The backend accepts exactly one; grids that offer
/// multi-column sorting must decide on a primary column before it gets here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Grid state driving one page request.
///
/// Built fresh on every parameter change and immutable once issued. `page` is
/// zero-based; `filters` keeps insertion order so the emitted query string is
/// deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortKey>,
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
}

impl QueryRequest {
    /// Creates a first-page request. A zero page size falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            sort: None,
            filters: Vec::new(),
            search: None,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortKey::new(field, direction));
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Serializes a [`QueryRequest`] into the backend's URL-encoded query
/// fragment for the collection behind `R`.
///
/// Pure and deterministic: the same request always produces byte-identical
/// output. Filter fields missing from `R::FILTERS` are dropped before they
/// reach the wire. A non-empty `search` wins over an explicit filter on
/// `R::SEARCH_FIELD`.
pub fn build_query<R: Resource>(request: &QueryRequest) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(request.filters.len() + 4);

    // Grid pages are 0-based, the backend's PageIndex is 1-based.
    pairs.push(("PageIndex", (request.page + 1).to_string()));
    pairs.push(("PageSize", request.page_size.to_string()));

    if let Some(sort) = &request.sort {
        pairs.push(("Order", format!("{} {}", sort.field, sort.direction.as_wire())));
    }

    for (field, value) in &request.filters {
        match R::wire_filter(field) {
            Some(wire) => pairs.push((wire, value.clone())),
            None => log::debug!(
                "dropping unrecognized filter field `{field}` for {}",
                R::COLLECTION
            ),
        }
    }

    if let Some(term) = request.search.as_deref().filter(|t| !t.is_empty()) {
        // Last write wins on the searchable field.
        pairs.retain(|(name, _)| *name != R::SEARCH_FIELD);
        pairs.push((R::SEARCH_FIELD, term.to_string()));
    }

    match serde_html_form::to_string(&pairs) {
        Ok(query) => query,
        Err(e) => {
            log::error!("failed to encode query for {}: {e}", R::COLLECTION);
            String::new()
        }
    }
}
