//! Domain entities administered by the dashboard.
//!
//! Each entity module carries the row type returned by the backend plus the
//! `New*`/`Update*` payload shapes used for create and full-body update
//! calls. The [`Resource`] trait ties a row type to its backend collection
//! and to the query vocabulary the grid is allowed to use against it.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod category;
pub mod company;
pub mod customer;
pub mod inventory;
pub mod product;
pub mod sale;
pub mod tax;
pub mod types;

/// A backend collection administered through the dashboard grid.
///
/// The associated constants define the per-entity query vocabulary: the wire
/// collection name, the fixed allow-list of filterable fields, and the field
/// free-text search folds onto. Filter fields not present in
/// [`Resource::FILTERS`] never reach the wire.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type for detail/update/delete endpoints.
    type Id: Copy + std::fmt::Display + Send + Sync;
    /// Payload for `POST /<COLLECTION>` (entity body without an id).
    type New: Serialize + Send + Sync;
    /// Full entity body for `PUT /<COLLECTION>/{id}`.
    type Update: Serialize + Send + Sync;

    /// Wire name of the backend collection, e.g. `Products`.
    const COLLECTION: &'static str;

    /// Recognized filter fields as `(grid field, wire parameter)` pairs.
    const FILTERS: &'static [(&'static str, &'static str)];

    /// Wire field that free-text search is folded onto. Defaults to `Name`;
    /// entities without a name override it.
    const SEARCH_FIELD: &'static str = "Name";

    /// Resolves a grid filter field to its wire parameter, if recognized.
    fn wire_filter(field: &str) -> Option<&'static str> {
        Self::FILTERS
            .iter()
            .find(|(grid, _)| *grid == field)
            .map(|(_, wire)| *wire)
    }
}
