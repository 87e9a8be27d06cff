//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &config.catalog.path);

    ctx.output.info("[display]");
    ctx.output.kv("page_size", &config.display.page_size.to_string());
    ctx.output.kv("currency_symbol", &config.display.currency_symbol);
    ctx.output
        .kv("max_visible_pages", &config.display.max_visible_pages.to_string());

    ctx.output.info("[filters]");
    let bound = |value: Option<f64>| value.map_or_else(|| "none".to_string(), |v| format!("{:.2}", v));
    ctx.output
        .kv("default_min_price", &bound(config.filters.default_min_price));
    ctx.output
        .kv("default_max_price", &bound(config.filters.default_max_price));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    // --json writes the JSON flavour of the file
    let name = if ctx.output.is_json() {
        CONFIG_NAMES[2]
    } else {
        CONFIG_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        StorefrontConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    let catalog = ctx.resolve_path(&ctx.config.catalog.path);
    if !catalog.exists() {
        ctx.output
            .warn(&format!("Catalog file not found yet: {}", catalog.display()));
    }

    Ok(())
}
