use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{CustomerId, ProductId, SaleId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    /// Human-facing invoice reference, e.g. `INV-2026-0042`.
    pub reference: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub sold_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub reference: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

impl NewSale {
    /// Builds a sale payload, rejecting a blank invoice reference.
    pub fn new(
        reference: String,
        customer_id: CustomerId,
        product_id: ProductId,
        quantity: i64,
        unit_price: f64,
    ) -> Result<Self, TypeConstraintError> {
        let reference = reference.trim().to_string();
        if reference.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            reference,
            customer_id,
            product_id,
            quantity,
            unit_price,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSale {
    pub reference: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

impl Resource for Sale {
    type Id = SaleId;
    type New = NewSale;
    type Update = UpdateSale;

    const COLLECTION: &'static str = "Sales";
    const FILTERS: &'static [(&'static str, &'static str)] = &[
        ("reference", "Reference"),
        ("customerId", "CustomerId"),
        ("productId", "ProductId"),
    ];
    // Sales have no name; free-text search matches the invoice reference.
    const SEARCH_FIELD: &'static str = "Reference";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sale_rejects_blank_references() {
        let customer = CustomerId::new(1).unwrap();
        let product = ProductId::new(2).unwrap();
        assert!(matches!(
            NewSale::new("   ".to_string(), customer, product, 1, 9.5),
            Err(TypeConstraintError::EmptyString)
        ));

        let sale = NewSale::new(" INV-2026-0042 ".to_string(), customer, product, 3, 9.5).unwrap();
        assert_eq!(sale.reference, "INV-2026-0042");
    }

    #[test]
    fn sale_rows_decode_from_the_wire_shape() {
        let sale: Sale = serde_json::from_value(serde_json::json!({
            "id": 11,
            "reference": "INV-2026-0042",
            "customerId": 4,
            "productId": 9,
            "quantity": 2,
            "unitPrice": 12.5,
            "total": 25.0,
            "soldAt": "2026-03-01T10:30:00"
        }))
        .unwrap();
        assert_eq!(sale.reference, "INV-2026-0042");
        assert_eq!(sale.customer_id.get(), 4);
        assert_eq!(sale.sold_at.to_string(), "2026-03-01 10:30:00");
    }
}
