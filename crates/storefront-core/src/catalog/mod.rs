//! Product catalog module.
//!
//! Contains the product record, the read-only catalog and date parsing.

mod catalog;
mod date;
mod product;

pub use catalog::Catalog;
pub use date::{parse_date, CATALOG_DATE_FORMAT, ISO_DATE_FORMAT};
pub use product::Product;
