//! Typed admin client for an inventory/sales REST backend.
//!
//! The crate is the data layer of a CRUD administration dashboard: every
//! screen fetches a paginated list, renders it in a grid, and calls back into
//! the same REST API for create/edit/delete. The pieces mirror that shape:
//!
//! - [`query`] translates grid state (page, sort, filters, free-text search)
//!   into the backend's query-string parameters.
//! - [`envelope`] parses the backend's paged response envelopes back into
//!   grid state.
//! - [`client`] is the typed REST client over a pluggable [`client::Transport`].
//! - [`grid`] owns the fetch lifecycle for one grid instance, including the
//!   stale-response guard for overlapping requests.

pub mod client;
pub mod domain;
pub mod envelope;
pub mod forms;
pub mod grid;
pub mod models;
pub mod notify;
pub mod query;

/// Page size used when a grid is created without an explicit one.
pub const DEFAULT_PAGE_SIZE: usize = 20;
