//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, a tax rate
//! inside its legal range) so that once a value reaches the domain layer it
//! can be treated as trusted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided tax rate is outside the accepted percentage range.
    #[error("tax rate must be between 0 and 100")]
    RateOutOfRange,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a product category.");
id_newtype!(CompanyId, "Unique identifier for a company.");
id_newtype!(CustomerId, "Unique identifier for a customer.");
id_newtype!(ProductId, "Unique identifier for a product.");
id_newtype!(InventoryItemId, "Unique identifier for an inventory record.");
id_newtype!(TaxId, "Unique identifier for a tax definition.");
id_newtype!(SaleId, "Unique identifier for a sale.");

/// Tax percentage constrained to `0.0..=100.0`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Validates the percentage range before wrapping the value.
    pub fn new(rate: f64) -> Result<Self, TypeConstraintError> {
        if (0.0..=100.0).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(TypeConstraintError::RateOutOfRange)
        }
    }

    /// Returns the raw percentage.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for TaxRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert!(ProductId::new(1).is_ok());
        assert_eq!(ProductId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProductId::new(-3), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn id_serializes_as_plain_integer() {
        let id = CustomerId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: CustomerId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn tax_rate_bounds() {
        assert!(TaxRate::new(0.0).is_ok());
        assert!(TaxRate::new(100.0).is_ok());
        assert_eq!(TaxRate::new(-0.5), Err(TypeConstraintError::RateOutOfRange));
        assert_eq!(TaxRate::new(100.1), Err(TypeConstraintError::RateOutOfRange));
    }
}
