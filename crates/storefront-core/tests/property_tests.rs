//! # Property-Based Tests
//!
//! Universal properties of the filter engine, the paginator and the cart.

use chrono::NaiveDate;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::num::NonZeroUsize;
use storefront_core::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

const TAGS: [&str; 4] = ["BATERIA", "ACEITE", "LLANTA", "PLT"];
const WORDS: [&str; 5] = ["Bateria", "aceite", "LLANTA", "filtro", "Bosch"];

fn tag() -> impl Strategy<Value = String> {
    prop::sample::select(TAGS.to_vec()).prop_map(str::to_string)
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|days| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + chrono::Duration::days(days)
    })
}

fn product(id: u64) -> impl Strategy<Value = Product> {
    (
        prop::sample::select(WORDS.to_vec()),
        0i64..20_000,
        0u8..=60,
        date(),
        btree_set(tag(), 0..3),
        btree_set(tag(), 0..3),
    )
        .prop_map(move |(word, cents, discount, released, platforms, genres)| {
            let mut product = Product::new(id, format!("{} {}", word, id), Money::from_cents(cents), released)
                .with_discount(discount);
            product.platforms = platforms;
            product.genres = genres;
            product
        })
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    (0usize..30).prop_flat_map(|len| {
        (0..len as u64)
            .map(product)
            .collect::<Vec<_>>()
    })
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["bat", "ACE", "o", "zzz"])),
        btree_set(tag(), 0..2),
        btree_set(tag(), 0..2),
        prop::option::of((0i64..20_000, 0i64..20_000)),
        prop::option::of(date()),
        prop::option::of(date()),
        any::<bool>(),
    )
        .prop_map(|(term, genres, platforms, price, from, to, discount_only)| {
            let mut criteria = FilterCriteria::new();
            if let Some(term) = term {
                criteria = criteria.with_search(term);
            }
            criteria.genres = genres;
            criteria.platforms = platforms;
            if let Some((a, b)) = price {
                criteria = criteria.with_price_range(Money::from_cents(a), Money::from_cents(b));
            }
            criteria.date_range = DateRange::new(from, to);
            criteria.discount_only = discount_only;
            criteria
        })
}

fn predicate_holds(product: &Product, criteria: &FilterCriteria) -> bool {
    product
        .name
        .to_lowercase()
        .contains(&criteria.search_term.to_lowercase())
        && criteria.genres.iter().all(|g| product.genres.contains(g))
        && criteria.platforms.iter().all(|p| product.platforms.contains(p))
        && criteria.price_range.contains(product.price)
        && criteria.date_range.from.map_or(true, |d| product.release_date >= d)
        && criteria.date_range.to.map_or(true, |d| product.release_date <= d)
        && (!criteria.discount_only || product.discount.percent() > 0)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The result is a subsequence of the catalog in original order.
    #[test]
    fn filter_result_is_ordered_subsequence(catalog in catalog(), criteria in criteria()) {
        let result = apply(&catalog, &criteria);
        let mut cursor = catalog.iter();
        for matched in &result {
            prop_assert!(cursor.any(|p| std::ptr::eq(p, *matched)));
        }
    }

    /// Applying the same criteria twice yields identical results.
    #[test]
    fn filter_is_deterministic(catalog in catalog(), criteria in criteria()) {
        prop_assert_eq!(apply(&catalog, &criteria), apply(&catalog, &criteria));
    }

    /// A product is present exactly when it satisfies every predicate.
    #[test]
    fn filter_is_conjunctive(catalog in catalog(), criteria in criteria()) {
        let result = apply(&catalog, &criteria);
        for product in &catalog {
            let present = result.iter().any(|p| p.id == product.id);
            prop_assert_eq!(present, predicate_holds(product, &criteria));
        }
    }

    /// The memo serves exactly what a direct call computes.
    #[test]
    fn cache_agrees_with_apply(catalog in catalog(), first in criteria(), second in criteria()) {
        let mut cache = FilterCache::new(&catalog);
        for criteria in [&first, &second, &first] {
            let cached = cache.results(criteria).to_vec();
            prop_assert_eq!(cached, apply(&catalog, criteria));
        }
    }

    /// Concatenating every page reconstructs the input exactly.
    #[test]
    fn pages_reconstruct_items(items in vec(any::<u32>(), 0..100), size in 1usize..20) {
        let size = NonZeroUsize::new(size).unwrap();
        let total_pages = paginate(&items, size, 1).total_pages();
        prop_assert!(total_pages >= 1);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            let page = paginate(&items, size, page);
            prop_assert!(page.len() <= size.get());
            rebuilt.extend_from_slice(page.items);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert!(paginate(&items, size, total_pages + 1).is_empty());
    }

    /// Item count and total always equal the sums over the lines.
    #[test]
    fn cart_derived_values_match_lines(ops in vec((0u64..5, 0i64..10_000, any::<bool>()), 0..40)) {
        let mut cart = CartStore::new();
        for (id, cents, remove) in ops {
            if remove {
                cart.remove_from_cart(ProductId::new(id));
            } else {
                cart.add_to_cart(CartEntry::new(id, format!("item {}", id), Money::from_cents(cents)));
            }
        }

        let count: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
        let total: i64 = cart.items().iter().map(|i| i.unit_price.cents() * i64::from(i.quantity)).sum();
        prop_assert_eq!(cart.item_count(), count);
        prop_assert_eq!(cart.total().cents(), total);
        prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));

        let mut ids: Vec<ProductId> = cart.items().iter().map(|i| i.product_id).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    /// Removing an id that is not in the cart changes nothing.
    #[test]
    fn cart_remove_absent_is_noop(ids in vec(0u64..10, 0..10), absent in 10u64..20) {
        let mut cart = CartStore::new();
        for id in ids {
            cart.add_to_cart(CartEntry::new(id, "x", Money::from_cents(100)));
        }
        let before = cart.clone();
        cart.remove_from_cart(ProductId::new(absent));
        prop_assert_eq!(cart, before);
    }
}
