//! Storefront error types.
//!
//! Filtering, pagination and cart mutation never fail. These errors only
//! come out of the edges that can: catalog construction and lookup, strict
//! date parsing and checkout.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur at the fallible edges of the storefront core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A date string could not be parsed.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required buyer field was left blank.
    #[error("Missing buyer field: {0}")]
    MissingBuyerField(&'static str),

    /// The buyer email is not an address.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
}
