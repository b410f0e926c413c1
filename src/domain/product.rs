use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{CategoryId, CompanyId, ProductId, TaxId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in the backend's currency.
    pub price: f64,
    pub category_id: CategoryId,
    pub company_id: CompanyId,
    pub tax_id: Option<TaxId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
    pub company_id: CompanyId,
    pub tax_id: Option<TaxId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
    pub company_id: CompanyId,
    pub tax_id: Option<TaxId>,
}

impl Resource for Product {
    type Id = ProductId;
    type New = NewProduct;
    type Update = UpdateProduct;

    const COLLECTION: &'static str = "Products";
    const FILTERS: &'static [(&'static str, &'static str)] = &[
        ("name", "Name"),
        ("description", "Description"),
        ("categoryId", "CategoryId"),
        ("companyId", "CompanyId"),
        ("taxId", "TaxId"),
    ];
}
