//! One-shot checkout from the command line.

use anyhow::{Context as _, Result};
use storefront_core::cart::{CartEntry, CartStore};
use storefront_core::catalog::Catalog;
use storefront_core::checkout::{checkout, BuyerDetails};
use storefront_core::ProductId;

use super::listing::print_cart;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut cart = fill_cart(&catalog, &args.add)?;
    print_cart(ctx, &cart);

    let buyer = BuyerDetails::new(args.name, args.email, args.address);
    let confirmation = checkout(&mut cart, &buyer).context("Checkout failed")?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
    } else {
        ctx.output
            .success(&confirmation.message(&ctx.config.display.currency_symbol));
    }
    Ok(())
}

/// Add one unit per id, in order. Unknown ids abort before anything is added.
pub fn fill_cart(catalog: &Catalog, ids: &[ProductId]) -> Result<CartStore> {
    let products = ids
        .iter()
        .map(|id| catalog.find(*id))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cart = CartStore::new();
    for product in products {
        cart.add_to_cart(CartEntry::from_product(product));
    }
    Ok(cart)
}
