//! Favorite toggling.

use anyhow::Result;
use storefront_commerce::prelude::*;

use super::{print_products, FavoriteArgs};
use crate::context::{load_catalog, load_favorites, Context};

/// Run the favorite command.
pub fn run(args: FavoriteArgs, ctx: &Context) -> Result<()> {
    let mut catalog = load_catalog(&args.catalog)?;
    let mut favorites = load_favorites(args.favorites.as_deref())?;
    catalog.apply_favorites(&favorites);

    for (id, toggled) in toggle_all(&mut catalog, &mut favorites, &args.toggle)? {
        ctx.output.success(&describe(id, toggled));
    }

    if ctx.output.is_json() {
        ctx.output.json(&favorites);
        return Ok(());
    }

    ctx.output.header("Favorites");
    let products: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| p.is_favorite)
        .collect();
    print_products(ctx, &products);
    Ok(())
}

/// Toggle each product in turn. Stops at the first unknown id.
fn toggle_all(
    catalog: &mut Catalog,
    favorites: &mut Favorites,
    ids: &[u64],
) -> Result<Vec<(ProductId, FavoriteToggle)>, CommerceError> {
    ids.iter()
        .copied()
        .map(ProductId::new)
        .map(|id| -> Result<_, CommerceError> {
            let product = catalog
                .get_mut(id)
                .ok_or(CommerceError::ProductNotFound(id))?;
            Ok((id, favorites.toggle(product)?))
        })
        .collect()
}

fn describe(id: ProductId, toggled: FavoriteToggle) -> String {
    match toggled {
        FavoriteToggle::Added(f) => format!("{} added as favorite {}", id, f.id),
        FavoriteToggle::Removed(f) => format!("{} removed (favorite {})", id, f.id),
    }
}
