//! Catalog filtering, pagination and session cart logic for the storefront.
//!
//! This crate is the pure, synchronous core behind the storefront UI:
//!
//! - **Catalog**: read-only products loaded once per session
//! - **Search**: conjunctive filter engine, memoized results, facet counts
//! - **Pagination**: stateless page slicing and navigation info
//! - **Cart**: session-local aggregation of quantities and totals
//! - **Checkout**: stub that validates the buyer and clears the cart
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//! use std::num::NonZeroUsize;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1, "Battery 45Ah", Money::from_cents(8999), "2024-03-01".parse().unwrap())
//!         .with_platform("BATERIA"),
//! ]);
//!
//! let criteria = FilterCriteria::new().with_search("battery");
//! let matches = catalog.search(&criteria);
//! let page = paginate(&matches, NonZeroUsize::new(8).unwrap(), 1);
//! assert_eq!(page.total_pages(), 1);
//!
//! let mut cart = CartStore::new();
//! cart.add_to_cart(CartEntry::from_product(matches[0]));
//! assert_eq!(cart.total(), Money::from_cents(8999));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;

pub use error::StorefrontError;
pub use ids::ProductId;
pub use money::{Discount, Money};

/// Result alias for the fallible edges of the core.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Discount, Money};

    // Catalog
    pub use crate::catalog::{parse_date, Catalog, Product};

    // Cart
    pub use crate::cart::{CartEntry, CartItem, CartStore};

    // Checkout
    pub use crate::checkout::{checkout, BuyerDetails, OrderConfirmation};

    // Search
    pub use crate::search::{
        apply, by_platform, facets, paginate, DateRange, Facet, FacetValue, FilterCache,
        FilterCriteria, Page, Pagination, PriceRange,
    };
}
