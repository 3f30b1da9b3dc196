//! Catalog consistency checks.

use anyhow::{bail, Result};
use storefront_commerce::{Catalog, CommerceError, Favorites};
use tracing::warn;

use super::ValidateArgs;
use crate::context::{load_catalog, load_favorites, Context};

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let favorites = load_favorites(args.favorites.as_deref())?;

    let problems = find_problems(&catalog, &favorites);
    if ctx.output.is_json() {
        let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
        ctx.output.json(&messages);
    }

    if problems.is_empty() {
        ctx.output.success(&format!(
            "{} products and {} favorites are consistent",
            catalog.len(),
            favorites.len()
        ));
        return Ok(());
    }

    for problem in &problems {
        warn!(%problem, "validation failed");
        ctx.output.warn(&problem.to_string());
    }
    bail!("{} problem(s) found", problems.len())
}

/// Every correlation problem in catalog order, then every dangling favorite.
fn find_problems(catalog: &Catalog, favorites: &Favorites) -> Vec<CommerceError> {
    let mut problems: Vec<CommerceError> = catalog
        .products()
        .iter()
        .filter_map(|p| p.validate().err())
        .collect();
    problems.extend(catalog.dangling_favorites(favorites));
    problems
}
