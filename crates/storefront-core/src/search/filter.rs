//! Filter criteria and the conjunctive filter engine.
//!
//! A product matches when it satisfies every active predicate family.
//! Families are never OR-ed together, and multi-select tag families are
//! intersections: a product must carry all selected tags.

use crate::catalog::{parse_date, Product};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An inclusive price range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Money, Money)", into = "(Money, Money)")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// Create a range. Reversed bounds are swapped.
    pub fn new(min: Money, max: Money) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// The unrestricted range.
    pub const fn any() -> Self {
        Self {
            min: Money::ZERO,
            max: Money::MAX,
        }
    }

    /// Lower bound, inclusive.
    pub fn min(&self) -> Money {
        self.min
    }

    /// Upper bound, inclusive.
    pub fn max(&self) -> Money {
        self.max
    }

    /// Check if a price falls within the range.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check if the range restricts nothing.
    pub fn is_any(&self) -> bool {
        *self == Self::any()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::any()
    }
}

impl From<(Money, Money)> for PriceRange {
    fn from((min, max): (Money, Money)) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (Money, Money) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

/// A release date window. An absent bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a window from optional bounds.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Build a range from raw input strings.
    ///
    /// Empty or unparseable bounds become absent rather than failing, so a
    /// half-typed date never breaks browsing.
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: parse_bound("from", from),
            to: parse_bound("to", to),
        }
    }

    /// Check if a date falls within the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Check if neither side is bounded.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

fn parse_bound(side: &'static str, raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(side, error = %e, "ignoring malformed date bound");
            None
        }
    }
}

/// The current combination of active filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive name substring. Empty matches everything.
    pub search_term: String,
    /// Required genres. Empty means no constraint.
    pub genres: BTreeSet<String>,
    /// Required platforms. Empty means no constraint.
    pub platforms: BTreeSet<String>,
    /// Inclusive list-price range.
    pub price_range: PriceRange,
    /// Release date window.
    pub date_range: DateRange,
    /// Only products with a discount.
    pub discount_only: bool,
}

impl FilterCriteria {
    /// Criteria that match every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Require a genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    /// Require a platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.insert(platform.into());
        self
    }

    /// Restrict the list price. Reversed bounds are swapped.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Restrict the release date.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Only match discounted products.
    pub fn discount_only(mut self) -> Self {
        self.discount_only = true;
        self
    }

    /// True when no predicate family restricts anything.
    pub fn is_unconstrained(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Check a single product against every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.predicates().iter().all(|p| p.matches(product))
    }

    /// The active predicate families, one entry per restricting criterion.
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::new();
        if !self.search_term.is_empty() {
            predicates.push(Predicate::Name(self.search_term.to_lowercase()));
        }
        if !self.genres.is_empty() {
            predicates.push(Predicate::Genres(&self.genres));
        }
        if !self.platforms.is_empty() {
            predicates.push(Predicate::Platforms(&self.platforms));
        }
        if !self.price_range.is_any() {
            predicates.push(Predicate::Price(self.price_range));
        }
        if let Some(from) = self.date_range.from {
            predicates.push(Predicate::ReleasedFrom(from));
        }
        if let Some(to) = self.date_range.to {
            predicates.push(Predicate::ReleasedTo(to));
        }
        if self.discount_only {
            predicates.push(Predicate::Discounted);
        }
        predicates
    }
}

/// A single predicate family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'c> {
    /// Lowercased name substring.
    Name(String),
    /// Product genres must be a superset.
    Genres(&'c BTreeSet<String>),
    /// Product platforms must be a superset.
    Platforms(&'c BTreeSet<String>),
    /// List price within the range.
    Price(PriceRange),
    /// Released on or after the date.
    ReleasedFrom(NaiveDate),
    /// Released on or before the date.
    ReleasedTo(NaiveDate),
    /// Discount above zero.
    Discounted,
}

impl Predicate<'_> {
    /// Check a product against this predicate.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::Name(term) => product.name.to_lowercase().contains(term.as_str()),
            Predicate::Genres(genres) => genres.is_subset(&product.genres),
            Predicate::Platforms(platforms) => platforms.is_subset(&product.platforms),
            Predicate::Price(range) => range.contains(product.price),
            Predicate::ReleasedFrom(from) => product.release_date >= *from,
            Predicate::ReleasedTo(to) => product.release_date <= *to,
            Predicate::Discounted => product.has_discount(),
        }
    }
}

/// Products matching every active criterion, in catalog order.
pub fn apply<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let predicates = criteria.predicates();
    let matches: Vec<&Product> = catalog
        .iter()
        .filter(|product| predicates.iter().all(|p| p.matches(product)))
        .collect();
    tracing::trace!(
        catalog = catalog.len(),
        predicates = predicates.len(),
        matches = matches.len(),
        "filter applied"
    );
    matches
}

/// Products carrying one platform tag.
pub fn by_platform<'a>(catalog: &'a [Product], platform: &str) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| product.platforms.contains(platform))
        .collect()
}
