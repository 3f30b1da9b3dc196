//! Catalog listing.

use anyhow::Result;
use storefront_commerce::{Catalog, Product};

use super::{print_products, ListArgs};
use crate::context::{load_catalog, load_favorites, Context};

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut catalog = load_catalog(&args.catalog)?;
    let favorites = load_favorites(args.favorites.as_deref())?;
    catalog.apply_favorites(&favorites);

    let products = listed(&catalog, args.search.as_deref());
    ctx.output
        .header(&format!("{} of {} products", products.len(), catalog.len()));
    print_products(ctx, &products);
    Ok(())
}

/// Products to show, narrowed by the search text when one is given.
fn listed<'a>(catalog: &'a Catalog, search: Option<&str>) -> Vec<&'a Product> {
    match search {
        Some(query) => catalog.search(query),
        None => catalog.products().iter().collect(),
    }
}
