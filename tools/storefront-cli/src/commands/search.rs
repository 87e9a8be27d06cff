//! Filtered catalog search.

use anyhow::Result;
use storefront_core::catalog::parse_date;
use storefront_core::search::{facets, DateRange, FilterCriteria};

use super::listing::print_listing;
use super::SearchArgs;
use crate::config::FilterDefaults;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    for date in [&args.from, &args.to].into_iter().flatten() {
        if !date.trim().is_empty() && parse_date(date).is_err() {
            ctx.output
                .warn(&format!("Ignoring malformed date {:?} (use YYYY-MM-DD or DD/MM/YYYY)", date));
        }
    }

    let catalog = ctx.catalog()?;
    let criteria = build_criteria(&args, &ctx.config.filters);
    ctx.output.debug(&format!("criteria: {:?}", criteria));

    let matches = catalog.search(&criteria);
    let facets = facets(matches.iter().copied(), &criteria);
    print_listing(ctx, "Products", &matches, args.page, facets);

    Ok(())
}

/// Translate command-line filters into criteria.
///
/// Price bounds fall back to the configured defaults; malformed dates become
/// unbounded.
pub fn build_criteria(args: &SearchArgs, defaults: &FilterDefaults) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();

    if let Some(query) = &args.query {
        criteria = criteria.with_search(query.trim());
    }
    for genre in &args.genre {
        criteria = criteria.with_genre(genre.as_str());
    }
    for platform in &args.platform {
        criteria = criteria.with_platform(platform.as_str());
    }
    if let Some((min, max)) = defaults.price_bounds(args.min_price, args.max_price) {
        criteria = criteria.with_price_range(min, max);
    }

    criteria = criteria.with_date_range(DateRange::parse(
        args.from.as_deref().unwrap_or(""),
        args.to.as_deref().unwrap_or(""),
    ));

    if args.discount_only {
        criteria = criteria.discount_only();
    }
    criteria
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    #[test]
    fn test_empty_args_are_unconstrained() {
        let criteria = build_criteria(&SearchArgs::default(), &FilterDefaults::default());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_all_filters() {
        let args = SearchArgs {
            query: Some("  bateria ".to_string()),
            genre: vec!["PLT".to_string()],
            platform: vec!["BATERIA".to_string(), "ACEITE".to_string()],
            min_price: Some(10.0),
            max_price: Some(99.99),
            from: Some("01/01/2023".to_string()),
            to: Some("not a date".to_string()),
            discount_only: true,
            page: 2,
        };
        let criteria = build_criteria(&args, &FilterDefaults::default());

        assert_eq!(criteria.search_term, "bateria");
        assert!(criteria.genres.contains("PLT"));
        assert_eq!(criteria.platforms.len(), 2);
        assert_eq!(criteria.price_range.min(), Money::from_cents(1000));
        assert_eq!(criteria.price_range.max(), Money::from_cents(9999));
        assert!(criteria.date_range.from.is_some());
        assert!(criteria.date_range.to.is_none());
        assert!(criteria.discount_only);
    }

    #[test]
    fn test_configured_price_default() {
        let defaults = FilterDefaults {
            default_min_price: None,
            default_max_price: Some(50.0),
        };
        let criteria = build_criteria(&SearchArgs::default(), &defaults);
        assert_eq!(criteria.price_range.min(), Money::ZERO);
        assert_eq!(criteria.price_range.max(), Money::from_cents(5000));
    }
}
