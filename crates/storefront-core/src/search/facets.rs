//! Facet counts for the filter sidebar.

use crate::catalog::Product;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g., "Genre").
    pub name: String,
    /// Product field this facet filters on.
    pub field: String,
    /// Facet values, sorted by value.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Look up a value's count.
    pub fn count(&self, value: &str) -> usize {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map_or(0, |v| v.count)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The tag.
    pub value: String,
    /// Number of products carrying the tag.
    pub count: usize,
    /// Whether the tag is part of the current criteria.
    pub selected: bool,
}

/// Genre and platform counts over `products`.
///
/// Selected tags always appear, with a zero count if no product carries
/// them, so the sidebar can still render them as checked.
pub fn facets<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    criteria: &FilterCriteria,
) -> Vec<Facet> {
    let mut genres: BTreeMap<&str, usize> = BTreeMap::new();
    let mut platforms: BTreeMap<&str, usize> = BTreeMap::new();

    for product in products {
        for genre in &product.genres {
            *genres.entry(genre).or_default() += 1;
        }
        for platform in &product.platforms {
            *platforms.entry(platform).or_default() += 1;
        }
    }

    vec![
        build("Genre", "genres", genres, &criteria.genres),
        build("Platform", "platforms", platforms, &criteria.platforms),
    ]
}

fn build<'a>(
    name: &str,
    field: &str,
    mut counts: BTreeMap<&'a str, usize>,
    selected: &'a BTreeSet<String>,
) -> Facet {
    for tag in selected {
        counts.entry(tag).or_default();
    }
    let mut facet = Facet::new(name, field);
    for (value, count) in counts {
        facet.add_value(value, count, selected.contains(value));
    }
    facet
}
