//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::catalog::Catalog;

use crate::catalog;
use crate::config::StorefrontConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        if let Some(path) = catalog_override {
            config.catalog.path = path.to_string();
        }

        tracing::debug!(config = ?config_path, catalog = %config.catalog.path, "context loaded");
        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Context with default configuration, ignoring any config file.
    pub fn with_defaults(catalog_override: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let mut config = StorefrontConfig::default();
        if let Some(path) = catalog_override {
            config.catalog.path = path.to_string();
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path: None,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read the configured catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        catalog::load(&self.resolve_path(&self.config.catalog.path))
    }

    /// Format an amount with the configured currency symbol.
    pub fn price(&self, amount: storefront_core::Money) -> String {
        amount.display_with(&self.config.display.currency_symbol)
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join("storefront.toml"));
    }

    #[test]
    fn test_with_defaults_applies_catalog_override() {
        let ctx = Context::with_defaults(Some("other.json"), Output::new(false, false)).unwrap();
        assert_eq!(ctx.config.catalog.path, "other.json");
        assert_eq!(ctx.config.display, StorefrontConfig::default().display);
        assert!(ctx.config_path.is_none());
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("storefront.json"), "{}").unwrap();
        std::fs::write(dir.path().join(".storefront.toml"), "").unwrap();

        let found = find_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".storefront.toml"));
    }
}
