//! Commerce error types.

use crate::ids::{FavoriteId, ProductId};
use thiserror::Error;

/// Errors raised by storefront model checks and observers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// `isFavorite` and `favoriteId` disagree.
    #[error("Product {product_id}: isFavorite and favoriteId disagree")]
    FavoriteMismatch { product_id: ProductId },

    /// Favorite points at a product that is not in the catalog.
    #[error("Favorite {favorite_id} refers to unknown product {parent_id}")]
    DanglingFavorite {
        favorite_id: FavoriteId,
        parent_id: ProductId,
    },

    /// Every favorite id has been handed out.
    #[error("No favorite ids left to allocate")]
    FavoriteIdsExhausted,

    /// Every observable handle was dropped.
    #[error("Observable closed")]
    ObservableClosed,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
