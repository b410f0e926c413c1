use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{TaxId, TaxRate};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    pub id: TaxId,
    pub name: String,
    pub rate: TaxRate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTax {
    pub name: String,
    pub rate: TaxRate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTax {
    pub name: String,
    pub rate: TaxRate,
}

impl Resource for Tax {
    type Id = TaxId;
    type New = NewTax;
    type Update = UpdateTax;

    const COLLECTION: &'static str = "Taxes";
    const FILTERS: &'static [(&'static str, &'static str)] = &[("name", "Name")];
}
