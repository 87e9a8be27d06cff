//! Checkout module.
//!
//! Checkout is a stub: it validates the buyer, snapshots the cart into a
//! confirmation and clears the cart. No payment is taken.

mod buyer;
mod order;

pub use buyer::BuyerDetails;
pub use order::{checkout, OrderConfirmation};
