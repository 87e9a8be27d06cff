//! Shared rendering for product listings and the cart.

use serde::Serialize;
use storefront_core::cart::CartStore;
use storefront_core::catalog::Product;
use storefront_core::search::{paginate, Facet, Pagination};

use crate::context::Context;
use crate::output::{plain_price, total_line, truncate};

const WIDTHS: [usize; 4] = [5, 32, 18, 20];

/// JSON shape of a listing page.
#[derive(Serialize)]
struct ListingJson<'a> {
    pagination: Pagination,
    products: &'a [&'a Product],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    facets: Vec<Facet>,
}

/// Print one page of `matches`, with optional facet counts over all of them.
pub fn print_listing(
    ctx: &Context,
    title: &str,
    matches: &[&Product],
    page: usize,
    facets: Vec<Facet>,
) {
    let page = paginate(matches, ctx.config.page_size(), page);

    if ctx.output.is_json() {
        ctx.output.json(&ListingJson {
            pagination: page.pagination,
            products: page.items,
            facets,
        });
        return;
    }

    ctx.output.header(&format!("{} ({} found)", title, matches.len()));

    if page.is_empty() {
        if matches.is_empty() {
            ctx.output.info("No products match the current filters.");
        } else {
            ctx.output.warn(&format!(
                "Page {} is out of range; there are {} page(s).",
                page.pagination.page,
                page.total_pages()
            ));
        }
    } else {
        let symbol = &ctx.config.display.currency_symbol;
        ctx.output.table_row(&["ID", "NAME", "PRICE", "PLATFORM"], &WIDTHS);
        for product in page.items {
            let id = product.id.to_string();
            let name = truncate(&product.name, WIDTHS[1]);
            let price = plain_price(product, symbol);
            let platforms = product.platforms.iter().cloned().collect::<Vec<_>>().join(", ");
            ctx.output.table_row(&[&id, &name, &price, &platforms], &WIDTHS);
        }
        ctx.output.info(&format!(
            "Showing {}-{} of {}",
            page.pagination.start_item(),
            page.pagination.end_item(),
            page.pagination.total
        ));
    }

    print_pager(ctx, &page.pagination);

    for facet in &facets {
        if facet.values.is_empty() {
            continue;
        }
        ctx.output.header(&facet.name);
        for value in &facet.values {
            let mark = if value.selected { "[x]" } else { "[ ]" };
            ctx.output.list_item(&format!("{} {} ({})", mark, value.value, value.count));
        }
    }
}

fn print_pager(ctx: &Context, pagination: &Pagination) {
    if pagination.total_pages <= 1 {
        return;
    }
    let numbers: Vec<String> = pagination
        .page_numbers(ctx.config.display.max_visible_pages)
        .into_iter()
        .map(|n| {
            if n == pagination.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    let prev = if pagination.has_prev { "‹ prev" } else { "" };
    let next = if pagination.has_next { "next ›" } else { "" };
    let pager = format!("{} {} {}", prev, numbers.join(" "), next);
    ctx.output.kv("Pages", pager.trim());
}

/// Print the cart lines and total.
pub fn print_cart(ctx: &Context, cart: &CartStore) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "item_count": cart.item_count(),
            "total": cart.total(),
        }));
        return;
    }

    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} x{}  {} each  {}",
            item.name,
            item.quantity,
            ctx.price(item.unit_price),
            ctx.price(item.line_total())
        ));
    }
    println!("  {}", total_line(cart.total(), &ctx.config.display.currency_symbol));
}
