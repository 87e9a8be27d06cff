//! Search module.
//!
//! Contains the filter engine, result memoization, facet counts and
//! pagination.

mod facets;
mod filter;
mod memo;
mod results;

pub use facets::{facets, Facet, FacetValue};
pub use filter::{apply, by_platform, DateRange, FilterCriteria, Predicate, PriceRange};
pub use memo::FilterCache;
pub use results::{paginate, Page, Pagination};
