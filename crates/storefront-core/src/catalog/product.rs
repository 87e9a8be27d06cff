//! Product records.

use crate::ids::ProductId;
use crate::money::{Discount, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A product in the catalog.
///
/// Products are immutable once loaded; the builder methods exist for the
/// data-loading layer and for tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name, matched by text search.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// List price before discount.
    pub price: Money,
    /// Percentage discount.
    #[serde(default)]
    pub discount: Discount,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Release date.
    #[serde(with = "crate::catalog::date::serde_date")]
    pub release_date: NaiveDate,
    /// Platform tags (product line).
    #[serde(default)]
    pub platforms: BTreeSet<String>,
    /// Genre tags (category).
    #[serde(default)]
    pub genres: BTreeSet<String>,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Distributor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl Product {
    /// Create a product with no tags, no discount and no stock.
    pub fn new(id: u64, name: impl Into<String>, price: Money, release_date: NaiveDate) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price,
            discount: Discount::NONE,
            stock: 0,
            release_date,
            platforms: BTreeSet::new(),
            genres: BTreeSet::new(),
            image: String::new(),
            developer: None,
            publisher: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the discount percentage, clamped to 100.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Discount::new(percent);
        self
    }

    /// Set units in stock.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Add a platform tag.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.insert(platform.into());
        self
    }

    /// Add a genre tag.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Price after the discount, as shown on product cards.
    pub fn discounted_price(&self) -> Money {
        self.discount.apply(self.price)
    }

    /// Check if a discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount.is_active()
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
