//! Product type.

use crate::error::CommerceError;
use crate::ids::{FavoriteId, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog item as displayed in the storefront grid and the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier. Fixed at construction.
    id: ProductId,
    /// Display title.
    pub title: String,
    /// Price in the store currency.
    pub price: f64,
    /// Display image reference.
    pub image_url: String,
    /// Whether the product is in the favorites list.
    pub is_favorite: bool,
    /// Whether the product is in the cart.
    pub is_added: bool,
    /// Favorite record id, present only while `is_favorite` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_id: Option<FavoriteId>,
}

impl Product {
    /// Create a product that is neither favorite nor in the cart.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image_url: image_url.into(),
            is_favorite: false,
            is_added: false,
            favorite_id: None,
        }
    }

    /// Get the product id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Mark the product as favorite, linked to the given favorite record.
    pub fn mark_favorite(&mut self, favorite_id: FavoriteId) {
        self.is_favorite = true;
        self.favorite_id = Some(favorite_id);
    }

    /// Unmark the product as favorite and return the previous favorite id.
    pub fn clear_favorite(&mut self) -> Option<FavoriteId> {
        self.is_favorite = false;
        self.favorite_id.take()
    }

    /// Check that `is_favorite` is set exactly when `favorite_id` is present.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.is_favorite == self.favorite_id.is_some() {
            Ok(())
        } else {
            Err(CommerceError::FavoriteMismatch {
                product_id: self.id,
            })
        }
    }

    /// Format the price with two decimals behind a currency symbol.
    pub fn price_display(&self, symbol: &str) -> String {
        format_price(symbol, self.price)
    }
}

pub(crate) fn format_price(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(ProductId::new(1), "Widget", 9.99, "/w.png")
    }

    #[test]
    fn test_product_creation() {
        let product = widget();
        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.title, "Widget");
        assert!(!product.is_favorite);
        assert!(!product.is_added);
        assert!(product.favorite_id.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_mark_and_clear_favorite() {
        let mut product = widget();
        product.mark_favorite(FavoriteId::new(5));
        assert!(product.is_favorite);
        assert_eq!(product.favorite_id, Some(FavoriteId::new(5)));
        assert!(product.validate().is_ok());

        assert_eq!(product.clear_favorite(), Some(FavoriteId::new(5)));
        assert!(!product.is_favorite);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let mut product = widget();
        product.is_favorite = true;
        assert_eq!(
            product.validate(),
            Err(CommerceError::FavoriteMismatch {
                product_id: ProductId::new(1)
            })
        );

        product.is_favorite = false;
        product.favorite_id = Some(FavoriteId::new(3));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Widget",
                "price": 9.99,
                "imageUrl": "/w.png",
                "isFavorite": false,
                "isAdded": false
            })
        );
    }

    #[test]
    fn test_json_keeps_favorite_id_presence() {
        let plain = widget();
        let text = serde_json::to_string(&plain).unwrap();
        assert!(!text.contains("favoriteId"));
        assert_eq!(serde_json::from_str::<Product>(&text).unwrap(), plain);

        let mut favorite = widget();
        favorite.mark_favorite(FavoriteId::new(5));
        let text = serde_json::to_string(&favorite).unwrap();
        assert!(text.contains("\"favoriteId\":5"));
        assert_eq!(serde_json::from_str::<Product>(&text).unwrap(), favorite);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(widget().price_display("$"), "$9.99");

        let mut product = widget();
        product.price = 20.0;
        assert_eq!(product.price_display("€"), "€20.00");
    }
}
