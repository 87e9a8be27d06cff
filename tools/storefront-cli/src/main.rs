//! Storefront CLI - browse a product catalog and check out from the terminal.
//!
//! Commands:
//! - `storefront search` - Filtered, paginated listing with facets
//! - `storefront grid` - Category page for one platform
//! - `storefront show` - Product detail
//! - `storefront checkout` - One-shot cart and order confirmation
//! - `storefront shop` - Interactive shopping session
//! - `storefront config` - Manage configuration

mod catalog;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CheckoutArgs, ConfigArgs, ConfigCommand, GridArgs, SearchArgs, ShowArgs};
use context::Context;
use output::Output;

/// Storefront CLI - browse products, fill a cart and check out
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with filters
    Search(SearchArgs),

    /// Show the product grid for a category
    Grid(GridArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Add products to a cart and place the order
    Checkout(CheckoutArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Build the context for `cli`.
///
/// `config init` starts from defaults so it can replace a config file that
/// no longer loads.
fn load_context(cli: &Cli, output: Output) -> Result<Context> {
    match &cli.command {
        Commands::Config(ConfigArgs {
            command: ConfigCommand::Init { .. },
        }) => Context::with_defaults(cli.catalog.as_deref(), output),
        _ => Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = Output::new(cli.verbose, cli.json);

    let ctx = match load_context(&cli, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Grid(args) => commands::grid::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
