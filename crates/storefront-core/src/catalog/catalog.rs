//! The read-only product catalog.

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::search::{self, FilterCriteria};
use std::collections::{BTreeSet, HashSet};

/// The full, read-only set of sellable products for a session.
///
/// Order is the order the data layer supplied and is preserved by every
/// view derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an already validated product list.
    pub fn new(products: Vec<Product>) -> Self {
        tracing::debug!(products = products.len(), "catalog loaded");
        Self { products }
    }

    /// Wrap a product list, rejecting duplicate ids.
    pub fn try_new(products: Vec<Product>) -> Result<Self, StorefrontError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StorefrontError::DuplicateProduct(product.id));
            }
        }
        Ok(Self::new(products))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if absent.
    pub fn find(&self, id: ProductId) -> Result<&Product, StorefrontError> {
        self.get(id).ok_or(StorefrontError::ProductNotFound(id))
    }

    /// Products matching every active criterion, in catalog order.
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        search::apply(&self.products, criteria)
    }

    /// Products tagged with one platform, for category pages.
    pub fn by_platform(&self, platform: &str) -> Vec<&Product> {
        search::by_platform(&self.products, platform)
    }

    /// Distinct genre tags across the catalog, sorted.
    pub fn all_genres(&self) -> BTreeSet<&str> {
        self.products
            .iter()
            .flat_map(|p| p.genres.iter().map(String::as_str))
            .collect()
    }

    /// Distinct platform tags across the catalog, sorted.
    pub fn all_platforms(&self) -> BTreeSet<&str> {
        self.products
            .iter()
            .flat_map(|p| p.platforms.iter().map(String::as_str))
            .collect()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
