use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::{CompanyId, CustomerId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Company the customer purchases on behalf of, if any.
    pub company_id: Option<CompanyId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_id: Option<CompanyId>,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: Option<String>,
        company_id: Option<CompanyId>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            company_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_id: Option<CompanyId>,
}

impl Resource for Customer {
    type Id = CustomerId;
    type New = NewCustomer;
    type Update = UpdateCustomer;

    const COLLECTION: &'static str = "Customers";
    const FILTERS: &'static [(&'static str, &'static str)] = &[
        ("name", "Name"),
        ("email", "Email"),
        ("phone", "Phone"),
        ("companyId", "CompanyId"),
    ];
}
