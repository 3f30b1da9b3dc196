//! CLI command implementations.

pub mod cart;
pub mod favorite;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::Args;
use storefront_commerce::Product;

use crate::context::Context;
use crate::output::flag;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Product list (JSON).
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Favorites list (JSON).
    #[arg(short, long)]
    pub favorites: Option<PathBuf>,

    /// Only show products whose title contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Product list (JSON).
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Product ids to add, in order.
    #[arg(short, long = "add")]
    pub add: Vec<u64>,

    /// Product ids to remove after the adds.
    #[arg(short, long = "remove")]
    pub remove: Vec<u64>,

    /// Open the cart drawer afterwards.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Product list (JSON).
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Favorites list (JSON).
    #[arg(short, long)]
    pub favorites: Option<PathBuf>,

    /// Product ids whose favorite state is flipped, in order.
    #[arg(short, long = "toggle", required = true)]
    pub toggle: Vec<u64>,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Product list (JSON).
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Favorites list (JSON).
    #[arg(short, long)]
    pub favorites: Option<PathBuf>,
}

const WIDTHS: [usize; 5] = [6, 28, 10, 3, 4];

/// Print products as a table, or as JSON in JSON mode.
pub(crate) fn print_products(ctx: &Context, products: &[&Product]) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.table_row(&["ID", "TITLE", "PRICE", "FAV", "CART"], &WIDTHS);
    for product in products {
        let id = product.id().to_string();
        let price = product.price_display(ctx.currency_symbol());
        let fav = flag(product.is_favorite, "♥");
        let added = flag(product.is_added, "✓");
        ctx.output.table_row(
            &[
                id.as_str(),
                product.title.as_str(),
                price.as_str(),
                fav.as_str(),
                added.as_str(),
            ],
            &WIDTHS,
        );
    }
}
