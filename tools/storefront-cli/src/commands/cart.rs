//! Cart session.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::prelude::*;
use tracing::debug;

use super::{print_products, CartArgs};
use crate::context::{load_catalog, Context};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartReport {
    cart: Vec<Product>,
    total: f64,
    total_display: String,
    drawer_open: bool,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut catalog = load_catalog(&args.catalog)?;
    let report = session(
        &mut catalog,
        &args.add,
        &args.remove,
        args.open,
        ctx.currency_symbol(),
    )?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Cart");
    let items: Vec<&Product> = report.cart.iter().collect();
    print_products(ctx, &items);
    ctx.output.kv("Items", &report.cart.len().to_string());
    ctx.output.kv("Total", &report.total_display);
    ctx.output.kv(
        "Drawer",
        if report.drawer_open { "open" } else { "closed" },
    );
    Ok(())
}

/// Apply the adds, then the removes, to a fresh cart over `catalog`.
fn session(
    catalog: &mut Catalog,
    add: &[u64],
    remove: &[u64],
    open: bool,
    symbol: &str,
) -> Result<CartReport, CommerceError> {
    let drawer = Drawer::new();
    let cart = CartContext::with_drawer(Observable::default(), &drawer);

    for id in add.iter().copied().map(ProductId::new) {
        let product = catalog
            .get_mut(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        if !cart.add_to_cart(product) {
            debug!(product_id = %id, "already in cart");
        }
    }

    for id in remove.iter().copied().map(ProductId::new) {
        let product = catalog
            .get_mut(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        if !cart.remove_from_cart(product) {
            debug!(product_id = %id, "was not in cart");
        }
    }

    if open {
        cart.open_drawer();
    }

    Ok(CartReport {
        cart: cart.cart().get(),
        total: cart.total_price(),
        total_display: cart.total_display(symbol),
        drawer_open: drawer.is_open(),
    })
}
