//! CLI command implementations.

pub mod checkout;
pub mod config;
pub mod grid;
pub mod listing;
pub mod search;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};
use storefront_core::ProductId;

/// Arguments for the search command.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive name search.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Required genre (repeatable, all must match).
    #[arg(short, long)]
    pub genre: Vec<String>,

    /// Required platform (repeatable, all must match).
    #[arg(short, long)]
    pub platform: Vec<String>,

    /// Minimum list price.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum list price.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Released on or after (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long)]
    pub from: Option<String>,

    /// Released on or before (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long)]
    pub to: Option<String>,

    /// Only discounted products.
    #[arg(short, long)]
    pub discount_only: bool,

    /// Page to show (1-based).
    #[arg(long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the grid command.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Platform to show; lists platforms when omitted.
    pub platform: Option<String>,

    /// Page to show (1-based).
    #[arg(long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the checkout command.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Product to add (repeat to add more units).
    #[arg(short, long = "add", required = true)]
    pub add: Vec<ProductId>,

    /// Buyer name.
    #[arg(long)]
    pub name: String,

    /// Buyer email.
    #[arg(long)]
    pub email: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
