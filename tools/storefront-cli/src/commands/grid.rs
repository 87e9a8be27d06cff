//! Category page: products for one platform.

use anyhow::Result;
use storefront_core::search::{facets, FilterCriteria};

use super::listing::print_listing;
use super::GridArgs;
use crate::context::Context;

/// Run the grid command.
pub fn run(args: GridArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let Some(platform) = args.platform else {
        let platforms: Vec<_> = catalog
            .all_platforms()
            .into_iter()
            .map(|p| (p, catalog.by_platform(p).len()))
            .collect();

        if ctx.output.is_json() {
            let map: serde_json::Map<String, serde_json::Value> = platforms
                .iter()
                .map(|(p, n)| (p.to_string(), (*n).into()))
                .collect();
            ctx.output.json(&map);
            return Ok(());
        }

        ctx.output.header("Categories");
        for (platform, count) in platforms {
            ctx.output.list_item(&format!("{} ({})", platform, count));
        }
        return Ok(());
    };

    let products = catalog.by_platform(&platform);
    if products.is_empty() {
        ctx.output.warn(&format!("No products in category {:?}", platform));
    }

    let criteria = FilterCriteria::new().with_platform(platform.as_str());
    let facets = facets(products.iter().copied(), &criteria);
    print_listing(ctx, &platform, &products, args.page, facets);

    Ok(())
}
