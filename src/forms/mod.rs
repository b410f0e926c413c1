//! Create/edit form payloads validated before they become domain types.

pub mod customer;
pub mod product;
