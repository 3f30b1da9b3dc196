//! Product grid.

use crate::catalog::{Favorites, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products as listed in the storefront, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Get a product by id for mutation.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Products whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Set every product's favorite fields from the favorites list.
    pub fn apply_favorites(&mut self, favorites: &Favorites) {
        for product in &mut self.products {
            match favorites.find_by_product(product.id()) {
                Some(favorite) => product.mark_favorite(favorite.id),
                None => {
                    product.clear_favorite();
                }
            }
        }
    }

    /// Set every product's `is_added` flag from the cart contents.
    pub fn apply_cart(&mut self, cart: &[Product]) {
        for product in &mut self.products {
            product.is_added = cart.iter().any(|item| item.id() == product.id());
        }
    }

    /// Check that every favorite points at a product in this catalog.
    ///
    /// Reports the first dangling favorite.
    pub fn check_favorites(&self, favorites: &Favorites) -> Result<(), CommerceError> {
        match self.dangling_favorites(favorites).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every favorite whose `parent_id` is not in this catalog, as
    /// `DanglingFavorite` errors in list order.
    pub fn dangling_favorites(&self, favorites: &Favorites) -> Vec<CommerceError> {
        favorites
            .entries()
            .iter()
            .filter(|favorite| self.get(favorite.parent_id).is_none())
            .map(|favorite| CommerceError::DanglingFavorite {
                favorite_id: favorite.id,
                parent_id: favorite.parent_id,
            })
            .collect()
    }

    /// Check the favorite correlation of every product.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.products.iter().try_for_each(Product::validate)
    }
}
