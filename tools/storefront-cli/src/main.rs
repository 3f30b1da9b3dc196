//! Storefront CLI - Inspect catalogs, favorites and carts.
//!
//! Commands:
//! - `storefront list` - List the catalog with favorite and cart flags
//! - `storefront cart` - Run adds and removes against a fresh cart
//! - `storefront favorite` - Toggle favorites
//! - `storefront validate` - Check favorite consistency

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_observability::{LogLevel, LogSettings};

use commands::{CartArgs, FavoriteArgs, ListArgs, ValidateArgs};

/// Storefront CLI - Inspect catalogs, favorites and carts
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
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    List(ListArgs),

    /// Add and remove products in a cart
    Cart(CartArgs),

    /// Toggle favorite products
    Favorite(FavoriteArgs),

    /// Check catalog and favorites consistency
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut log = ctx.config.log;
    if ctx.output.is_verbose() {
        log = LogSettings::new(log.level.min(LogLevel::Debug), log.format);
    }
    if !storefront_observability::init(&log) {
        tracing::debug!("log subscriber already installed, keeping it");
    }
    tracing::debug!(config = ?ctx.config, "config loaded");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Favorite(args) => commands::favorite::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
