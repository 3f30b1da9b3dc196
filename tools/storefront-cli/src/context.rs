//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::{Catalog, Favorites};
use tracing::debug;

use crate::config::StorefrontConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file or the nearest discovered one.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => StorefrontConfig::load(path)?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match find_config(&cwd) {
                    Some(path) => StorefrontConfig::load(&path)?,
                    None => StorefrontConfig::default(),
                }
            }
        };

        Ok(Self { config, output })
    }

    /// Configured currency symbol for price columns.
    pub fn currency_symbol(&self) -> &str {
        &self.config.store.currency_symbol
    }
}

/// Find a config file in `start` or one of its parents.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Read a JSON product list.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Read a JSON favorites list, or start empty when no file is given.
pub fn load_favorites(path: Option<&Path>) -> Result<Favorites> {
    let Some(path) = path else {
        return Ok(Favorites::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read favorites: {}", path.display()))?;
    let favorites: Favorites = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse favorites: {}", path.display()))?;
    debug!(path = %path.display(), favorites = favorites.len(), "favorites loaded");
    Ok(favorites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".storefront.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".storefront.toml"));
    }

    #[test]
    fn test_load_catalog_and_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("products.json");
        let favorites_path = dir.path().join("favorites.json");
        std::fs::write(
            &catalog_path,
            r#"[{"id":1,"title":"Widget","price":9.99,"imageUrl":"/w.png","isFavorite":false,"isAdded":false}]"#,
        )
        .unwrap();
        std::fs::write(&favorites_path, r#"[{"id":5,"parentId":1}]"#).unwrap();

        let catalog = load_catalog(&catalog_path).unwrap();
        assert_eq!(catalog.len(), 1);

        let favorites = load_favorites(Some(&favorites_path)).unwrap();
        assert_eq!(favorites.len(), 1);
        assert!(load_favorites(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_catalog_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
