use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{InventoryItemId, ProductId};

/// Stock level of one product at one location.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub product_id: ProductId,
    pub location: String,
    pub quantity: i64,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub product_id: ProductId,
    pub location: String,
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryItem {
    pub location: String,
    pub quantity: i64,
}

impl Resource for InventoryItem {
    type Id = InventoryItemId;
    type New = NewInventoryItem;
    type Update = UpdateInventoryItem;

    const COLLECTION: &'static str = "Inventory";
    const FILTERS: &'static [(&'static str, &'static str)] =
        &[("productId", "ProductId"), ("location", "Location")];
    // Inventory rows have no name; free-text search matches the location.
    const SEARCH_FIELD: &'static str = "Location";
}
