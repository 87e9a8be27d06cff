//! Buyer details collected by the checkout form.

use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// Who the order is for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuyerDetails {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Delivery address, single line.
    pub address: String,
}

impl BuyerDetails {
    /// Create buyer details.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Check that every field is filled in and the email looks like one.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(StorefrontError::MissingBuyerField(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(StorefrontError::InvalidEmail(email.to_string())),
        }
    }

    /// Check if every field passes validation.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}
