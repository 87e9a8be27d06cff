//! Interactive shopping session.
//!
//! One cart lives for the whole session. Browsing goes through a
//! [`FilterCache`], so paging back and forth over the same filters does not
//! rescan the catalog.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use storefront_core::cart::{CartEntry, CartStore};
use storefront_core::catalog::Catalog;
use storefront_core::checkout::{checkout, BuyerDetails};
use storefront_core::search::{facets, FilterCache, FilterCriteria, Pagination};
use storefront_core::ProductId;

use super::listing::{print_cart, print_listing};
use crate::context::Context;

const MENU: [&str; 7] = [
    "Browse products",
    "Add product to cart",
    "Remove product from cart",
    "View cart",
    "Clear cart",
    "Checkout",
    "Quit",
];

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("The shop session is interactive and does not support --json");
    }

    let catalog = ctx.catalog()?;
    let mut cache = FilterCache::new(catalog.products());
    let mut cart = CartStore::new();

    ctx.output
        .header(&format!("Welcome! {} products available.", catalog.len()));

    loop {
        let prompt = format!("Cart: {} item(s), {}", cart.item_count(), ctx.price(cart.total()));
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(ctx, &catalog, &mut cache)?,
            1 => add(ctx, &catalog, &mut cart)?,
            2 => remove(ctx, &mut cart)?,
            3 => print_cart(ctx, &cart),
            4 => clear(ctx, &mut cart)?,
            5 => place_order(ctx, &mut cart)?,
            _ => break,
        }
    }

    ctx.output.debug(&format!(
        "filter cache: {} hit(s), {} miss(es)",
        cache.hits(),
        cache.misses()
    ));
    if !cart.is_empty() {
        ctx.output
            .warn(&format!("Leaving with {} unpurchased item(s).", cart.item_count()));
    }
    Ok(())
}

fn browse<'a>(ctx: &Context, catalog: &'a Catalog, cache: &mut FilterCache<'a>) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search (blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let mut categories = vec!["All".to_string()];
    categories.extend(catalog.all_platforms().into_iter().map(str::to_string));
    let category = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;

    let discount_only = Confirm::new()
        .with_prompt("Only discounted products?")
        .default(false)
        .interact()?;

    let mut criteria = FilterCriteria::new().with_search(query.trim());
    if category > 0 {
        criteria = criteria.with_platform(categories[category].as_str());
    }
    if discount_only {
        criteria = criteria.discount_only();
    }

    let mut page = 1;
    loop {
        let matches = cache.results(&criteria).to_vec();
        let facets = if page == 1 {
            facets(matches.iter().copied(), &criteria)
        } else {
            Vec::new()
        };
        print_listing(ctx, "Products", &matches, page, facets);

        let pagination = Pagination::new(page, ctx.config.page_size(), matches.len());
        let mut options: Vec<(&str, isize)> = Vec::new();
        if pagination.has_next {
            options.push(("Next page", 1));
        }
        if pagination.has_prev {
            options.push(("Previous page", -1));
        }
        if options.is_empty() {
            return Ok(());
        }
        options.push(("Back to menu", 0));

        let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
        let selected = Select::new().items(&labels).default(0).interact()?;
        match options[selected].1 {
            0 => return Ok(()),
            step => page = page.saturating_add_signed(step),
        }
    }
}

fn add(ctx: &Context, catalog: &Catalog, cart: &mut CartStore) -> Result<()> {
    let id: ProductId = Input::new().with_prompt("Product ID").interact_text()?;

    match catalog.find(id) {
        Ok(product) => {
            let quantity = cart.add_to_cart(CartEntry::from_product(product));
            ctx.output
                .success(&format!("Added {} (x{} in cart)", product.name, quantity));
        }
        Err(e) => ctx.output.warn(&e.to_string()),
    }
    Ok(())
}

fn remove(ctx: &Context, cart: &mut CartStore) -> Result<()> {
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let labels: Vec<String> = cart
        .items()
        .iter()
        .map(|item| format!("{} x{}", item.name, item.quantity))
        .collect();
    let selected = Select::new()
        .with_prompt("Remove which product?")
        .items(&labels)
        .default(0)
        .interact()?;

    let item = &cart.items()[selected];
    let (id, name) = (item.product_id, item.name.clone());
    cart.remove_from_cart(id);
    ctx.output.success(&format!("Removed {}", name));
    Ok(())
}

fn clear(ctx: &Context, cart: &mut CartStore) -> Result<()> {
    if cart.is_empty() {
        return Ok(());
    }
    let confirmed = Confirm::new()
        .with_prompt("Empty the cart?")
        .default(false)
        .interact()?;
    if confirmed {
        cart.clear_cart();
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

fn place_order(ctx: &Context, cart: &mut CartStore) -> Result<()> {
    if cart.is_empty() {
        ctx.output.info("Add something to the cart first.");
        return Ok(());
    }
    print_cart(ctx, cart);

    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let address: String = Input::new().with_prompt("Address").interact_text()?;

    match checkout(cart, &BuyerDetails::new(name, email, address)) {
        Ok(confirmation) => ctx
            .output
            .success(&confirmation.message(&ctx.config.display.currency_symbol)),
        Err(e) => ctx.output.warn(&format!("{}. Your cart was kept.", e)),
    }
    Ok(())
}
