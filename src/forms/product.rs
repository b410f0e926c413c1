use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{CategoryId, CompanyId, TaxId, TypeConstraintError};

#[derive(Deserialize, Validate)]
/// Form data for creating a product.
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category_id: i32,
    pub company_id: i32,
    pub tax_id: Option<i32>,
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing product.
pub struct SaveProductForm {
    /// Product identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category_id: i32,
    pub company_id: i32,
    pub tax_id: Option<i32>,
}

impl TryFrom<&AddProductForm> for NewProduct {
    type Error = TypeConstraintError;

    fn try_from(form: &AddProductForm) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            name: form.name.trim().to_string(),
            description: Some(form.description.trim().to_string()).filter(|s| !s.is_empty()),
            price: form.price,
            category_id: CategoryId::new(form.category_id)?,
            company_id: CompanyId::new(form.company_id)?,
            tax_id: form.tax_id.map(TaxId::new).transpose()?,
        })
    }
}

impl TryFrom<&SaveProductForm> for UpdateProduct {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveProductForm) -> Result<Self, Self::Error> {
        Ok(UpdateProduct {
            name: form.name.trim().to_string(),
            description: Some(form.description.trim().to_string()).filter(|s| !s.is_empty()),
            price: form.price,
            category_id: CategoryId::new(form.category_id)?,
            company_id: CompanyId::new(form.company_id)?,
            tax_id: form.tax_id.map(TaxId::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn form() -> AddProductForm {
        AddProductForm {
            name: "  Espresso Machine ".to_string(),
            description: "".to_string(),
            price: 349.0,
            category_id: 2,
            company_id: 5,
            tax_id: None,
        }
    }

    #[test]
    fn valid_form_converts_into_new_product() {
        let form = form();
        assert!(form.validate().is_ok());

        let new = NewProduct::try_from(&form).unwrap();
        assert_eq!(new.name, "Espresso Machine");
        assert!(new.description.is_none());
        assert_eq!(new.category_id.get(), 2);
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut form = form();
        form.price = -1.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn non_positive_ids_fail_conversion() {
        let mut form = form();
        form.category_id = 0;
        assert!(matches!(
            NewProduct::try_from(&form),
            Err(TypeConstraintError::NonPositiveId)
        ));
    }
}
