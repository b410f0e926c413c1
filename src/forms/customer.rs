use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::domain::types::{CompanyId, TypeConstraintError};

#[derive(Deserialize, Validate)]
/// Form data for creating a customer.
pub struct AddCustomerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub company_id: Option<i32>,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing customer.
pub struct SaveCustomerForm {
    /// Customer identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub company_id: Option<i32>,
}

impl TryFrom<&AddCustomerForm> for NewCustomer {
    type Error = TypeConstraintError;

    fn try_from(form: &AddCustomerForm) -> Result<Self, Self::Error> {
        Ok(NewCustomer::new(
            form.name.clone(),
            Some(form.email.clone()),
            Some(form.phone.clone()),
            form.company_id.map(CompanyId::new).transpose()?,
        ))
    }
}

impl TryFrom<&SaveCustomerForm> for UpdateCustomer {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveCustomerForm) -> Result<Self, Self::Error> {
        let normalized = NewCustomer::new(
            form.name.clone(),
            Some(form.email.clone()),
            Some(form.phone.clone()),
            form.company_id.map(CompanyId::new).transpose()?,
        );
        Ok(UpdateCustomer {
            name: normalized.name,
            email: normalized.email,
            phone: normalized.phone,
            company_id: normalized.company_id,
        })
    }
}
