//! Order confirmation and the checkout stub.

use crate::cart::{CartItem, CartStore};
use crate::checkout::BuyerDetails;
use crate::error::StorefrontError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What the buyer confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Buyer details as submitted.
    pub buyer: BuyerDetails,
    /// Cart lines at confirmation time.
    pub lines: Vec<CartItem>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Order total.
    pub total: Money,
}

impl OrderConfirmation {
    /// Message shown to the buyer, e.g. "Order confirmed! Total: $25.00".
    pub fn message(&self, currency_symbol: &str) -> String {
        format!(
            "Order confirmed! Total: {}",
            self.total.display_with(currency_symbol)
        )
    }
}

/// Confirm the order and clear the cart.
///
/// An empty cart or invalid buyer details leave the cart untouched.
pub fn checkout(
    cart: &mut CartStore,
    buyer: &BuyerDetails,
) -> Result<OrderConfirmation, StorefrontError> {
    if cart.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }
    buyer.validate()?;

    let confirmation = OrderConfirmation {
        buyer: buyer.clone(),
        lines: cart.items().to_vec(),
        item_count: cart.item_count(),
        total: cart.total(),
    };
    tracing::info!(
        items = confirmation.item_count,
        total = %confirmation.total,
        "order confirmed"
    );

    cart.clear_cart();
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartEntry;

    fn buyer() -> BuyerDetails {
        BuyerDetails::new("Ana", "ana@example.com", "Calle 1")
    }

    fn filled_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(CartEntry::new(1u64, "Bateria", Money::from_cents(1000)));
        cart.add_to_cart(CartEntry::new(1u64, "Bateria", Money::from_cents(1000)));
        cart.add_to_cart(CartEntry::new(2u64, "Aceite", Money::from_cents(500)));
        cart
    }

    #[test]
    fn test_checkout_clears_cart() {
        let mut cart = filled_cart();
        let confirmation = checkout(&mut cart, &buyer()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(confirmation.item_count, 3);
        assert_eq!(confirmation.total, Money::from_cents(2500));
        assert_eq!(confirmation.lines.len(), 2);
        assert_eq!(confirmation.message("$"), "Order confirmed! Total: $25.00");
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = CartStore::new();
        assert_eq!(checkout(&mut cart, &buyer()), Err(StorefrontError::EmptyCart));
    }

    #[test]
    fn test_checkout_invalid_buyer_keeps_cart() {
        let mut cart = filled_cart();
        let bad = BuyerDetails::new("Ana", "not-an-email", "Calle 1");

        assert!(checkout(&mut cart, &bad).is_err());
        assert_eq!(cart.item_count(), 3);
    }
}
