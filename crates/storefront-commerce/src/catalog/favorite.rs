//! Favorite type.

use crate::catalog::Product;
use crate::ids::{FavoriteId, ProductId};
use serde::{Deserialize, Serialize};

/// A favorites-list entry pointing back at a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Favorite record id.
    pub id: FavoriteId,
    /// Id of the product this favorite refers to.
    pub parent_id: ProductId,
}

impl Favorite {
    /// Create a favorite record for the product `parent_id`.
    pub fn new(id: FavoriteId, parent_id: ProductId) -> Self {
        Self { id, parent_id }
    }

    /// Check if this favorite refers to the given product.
    pub fn refers_to(&self, product: &Product) -> bool {
        self.parent_id == product.id()
    }
}
