//! Call-site memoization of filter results.

use crate::catalog::Product;
use crate::search::{apply, FilterCriteria};

/// Remembers the last criteria applied to one catalog and reuses the
/// result until the criteria change.
///
/// The cache borrows the catalog for its whole lifetime, so it can never
/// serve results computed against a different product list.
#[derive(Debug)]
pub struct FilterCache<'a> {
    catalog: &'a [Product],
    last: Option<(FilterCriteria, Vec<&'a Product>)>,
    hits: u64,
    misses: u64,
}

impl<'a> FilterCache<'a> {
    /// Create an empty cache over `catalog`.
    pub fn new(catalog: &'a [Product]) -> Self {
        Self {
            catalog,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Filtered view for `criteria`, recomputed only when it differs from
    /// the previous call.
    pub fn results(&mut self, criteria: &FilterCriteria) -> &[&'a Product] {
        let fresh = matches!(&self.last, Some((cached, _)) if cached == criteria);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            tracing::trace!(misses = self.misses, "filter cache miss");
            self.last = Some((criteria.clone(), apply(self.catalog, criteria)));
        }
        match &self.last {
            Some((_, matches)) => matches.as_slice(),
            None => &[],
        }
    }

    /// Forget the cached result.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Number of calls served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that recomputed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
