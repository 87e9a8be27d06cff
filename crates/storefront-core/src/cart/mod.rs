//! Shopping cart module.
//!
//! Contains the session cart store and its line items.

mod cart;

pub use cart::{CartEntry, CartItem, CartStore};
