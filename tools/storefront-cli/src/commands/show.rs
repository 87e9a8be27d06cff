//! Product detail.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{price_tag, stock_badge};

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.find(args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "discounted_price": product.discounted_price(),
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Price", &price_tag(product, &ctx.config.display.currency_symbol));
    ctx.output.kv("Stock", &stock_badge(product.stock));
    ctx.output.kv("Released", &product.release_date.format("%d/%m/%Y").to_string());
    if !product.platforms.is_empty() {
        ctx.output.kv("Platforms", &join(&product.platforms));
    }
    if !product.genres.is_empty() {
        ctx.output.kv("Genres", &join(&product.genres));
    }
    if let Some(developer) = &product.developer {
        ctx.output.kv("Developer", developer);
    }
    if let Some(publisher) = &product.publisher {
        ctx.output.kv("Publisher", publisher);
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }

    Ok(())
}

fn join(tags: &std::collections::BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join(", ")
}
