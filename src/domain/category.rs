use serde::{Deserialize, Serialize};

use crate::domain::Resource;
use crate::domain::types::CategoryId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
}

impl Resource for Category {
    type Id = CategoryId;
    type New = NewCategory;
    type Update = UpdateCategory;

    const COLLECTION: &'static str = "Categories";
    const FILTERS: &'static [(&'static str, &'static str)] =
        &[("name", "Name"), ("description", "Description")];
}
