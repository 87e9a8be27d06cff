//! Cart store and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The payload of an add-to-cart action: a snapshot of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// Product being added.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
}

impl CartEntry {
    /// Create an add-to-cart payload.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Snapshot a catalog product at its discounted price.
    pub fn from_product(product: &Product) -> Self {
        Self::new(product.id, product.name.clone(), product.discounted_price())
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product ID, unique within the cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price locked at the first add.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line total (unit_price * quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Session-local shopping cart.
///
/// Repeated adds of the same product aggregate into one line. Lines keep
/// insertion order. Counts and totals are derived from the lines on every
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity goes up by one and
    /// the stored name and price are kept. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, entry: CartEntry) -> u32 {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == entry.id)
        {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product_id = %entry.id, quantity = existing.quantity, "cart quantity incremented");
            return existing.quantity;
        }

        tracing::debug!(product_id = %entry.id, "cart item added");
        self.items.push(CartItem {
            product_id: entry.id,
            name: entry.name,
            unit_price: entry.price,
            quantity: 1,
        });
        1
    }

    /// Remove a product's line entirely. Unknown ids are ignored.
    ///
    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != id);
        let removed = self.items.len() < len_before;
        tracing::debug!(product_id = %id, removed, "cart remove");
        removed
    }

    /// Clear all items from the cart.
    pub fn clear_cart(&mut self) {
        tracing::debug!(lines = self.items.len(), "cart cleared");
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product ID.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == id)
    }

    /// Check if a product has a line in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// One-line summary, e.g. `"2x Bateria, 1x Aceite"`.
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u64, name: &str, cents: i64) -> CartEntry {
        CartEntry::new(id, name, Money::from_cents(cents))
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.summary(), "");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add_to_cart(entry(1, "Bateria", 1000)), 1);
        assert_eq!(cart.add_to_cart(entry(1, "Bateria", 1000)), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_price_locked_at_first_add() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "Bateria", 1000));
        cart.add_to_cart(entry(1, "Bateria renamed", 9999));

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.unit_price, Money::from_cents(1000));
        assert_eq!(line.name, "Bateria");
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(3, "C", 100));
        cart.add_to_cart(entry(1, "A", 100));
        cart.add_to_cart(entry(3, "C", 100));
        cart.add_to_cart(entry(2, "B", 100));

        let order: Vec<u64> = cart.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(cart.summary(), "2x C, 1x A, 1x B");
    }

    #[test]
    fn test_total() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "A", 1000));
        cart.add_to_cart(entry(1, "A", 1000));
        cart.add_to_cart(entry(2, "B", 500));

        assert_eq!(cart.total(), Money::from_cents(2500));
        assert_eq!(cart.total().to_string(), "25.00");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "A", 1000));
        cart.add_to_cart(entry(1, "A", 1000));
        cart.add_to_cart(entry(2, "B", 500));

        assert!(cart.remove_from_cart(ProductId::new(1)));
        assert!(!cart.contains(ProductId::new(1)));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(500));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "A", 1000));
        let before = cart.clone();

        assert!(!cart.remove_from_cart(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "A", 1000));
        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);

        cart.add_to_cart(entry(1, "A", 700));
        assert_eq!(cart.total(), Money::from_cents(700));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = CartStore::new();
        cart.add_to_cart(entry(1, "A", 1));
        cart.items[0].quantity = u32::MAX;
        assert_eq!(cart.add_to_cart(entry(1, "A", 1)), u32::MAX);
    }

    #[test]
    fn test_entry_from_product_uses_discounted_price() {
        let product = Product::new(
            9,
            "Llanta R15",
            Money::from_cents(20000),
            NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
        )
        .with_discount(20);

        let entry = CartEntry::from_product(&product);
        assert_eq!(entry.id, ProductId::new(9));
        assert_eq!(entry.price, Money::from_cents(16000));
    }
}
