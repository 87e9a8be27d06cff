//! CLI configuration.

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::Money;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Where the product catalog lives.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing and price display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Filter defaults applied when the user passes none.
    #[serde(default)]
    pub filters: FilterDefaults,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Reject values the storefront cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.display.page_size == 0 {
            bail!("display.page_size must be at least 1");
        }
        if self.display.max_visible_pages == 0 {
            bail!("display.max_visible_pages must be at least 1");
        }
        for (key, value) in [
            ("filters.default_min_price", self.filters.default_min_price),
            ("filters.default_max_price", self.filters.default_max_price),
        ] {
            if let Some(price) = value {
                if !price.is_finite() || price < 0.0 {
                    bail!("{} must be a non-negative amount, got {}", key, price);
                }
            }
        }
        Ok(())
    }

    /// Page size as the paginator expects it.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.display.page_size).unwrap_or(NonZeroUsize::MIN)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to the products JSON file, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Products per page (default: 8).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Prefix for formatted prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Page numbers shown in the pager.
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,
}

fn default_page_size() -> usize {
    8
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_max_visible_pages() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            currency_symbol: default_currency_symbol(),
            max_visible_pages: default_max_visible_pages(),
        }
    }
}

/// Default price bounds, as decimal amounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_min_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_max_price: Option<f64>,
}

impl FilterDefaults {
    /// Resolve price bounds, preferring explicit values over the defaults.
    ///
    /// Returns `None` when neither side is bounded.
    pub fn price_bounds(&self, min: Option<f64>, max: Option<f64>) -> Option<(Money, Money)> {
        let min = min.or(self.default_min_price);
        let max = max.or(self.default_max_price);
        if min.is_none() && max.is_none() {
            return None;
        }
        Some((
            min.map(Money::from_decimal).unwrap_or(Money::ZERO),
            max.map(Money::from_decimal).unwrap_or(Money::MAX),
        ))
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
path = "data/products.json"

[display]
page_size = 8
currency_symbol = "$"
max_visible_pages = 5

[filters]
# default_min_price = 0.0
# default_max_price = 1000.0
"#
    .to_string()
}
