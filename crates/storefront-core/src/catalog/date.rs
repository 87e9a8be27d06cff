//! Release date parsing.
//!
//! Catalog records write dates as `DD/MM/YYYY`; date pickers produce
//! ISO `YYYY-MM-DD`. Both are accepted everywhere a date is read.

use crate::error::StorefrontError;
use chrono::NaiveDate;

/// Format used by catalog records.
pub const CATALOG_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format used by date inputs and for serialization.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date in either ISO or catalog format.
pub fn parse_date(input: &str) -> Result<NaiveDate, StorefrontError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, CATALOG_DATE_FORMAT))
        .map_err(|_| StorefrontError::InvalidDate(trimmed.to_string()))
}

/// Serde adapter for release dates: reads both formats, writes ISO.
pub(crate) mod serde_date {
    use super::{parse_date, ISO_DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Write the date in ISO format.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(ISO_DATE_FORMAT))
    }

    /// Read an ISO or DD/MM/YYYY date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}
