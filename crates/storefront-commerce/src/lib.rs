//! Storefront product, favorite and cart types.
//!
//! This crate provides the data model shared by storefront UI layers:
//!
//! - **Catalog**: `Product` and `Favorite` records, the product grid
//!   (`Catalog`) and the favorites list (`Favorites`)
//! - **Cart**: an observable cart and the `CartContext` capability bundle
//!   with add/remove and drawer controls
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let drawer = Drawer::new();
//! let ctx = CartContext::with_drawer(Observable::new(Vec::new()), &drawer);
//!
//! let mut product = Product::new(ProductId::new(1), "Widget", 9.99, "/w.png");
//! ctx.add_to_cart(&mut product);
//! ctx.open_drawer();
//!
//! assert!(product.is_added);
//! assert!(ctx.contains(ProductId::new(1)));
//! assert!(drawer.is_open());
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use cart::{CartCapabilities, CartContext, Drawer, Observable};
pub use catalog::{Catalog, Favorite, FavoriteToggle, Favorites, Product};
pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Catalog, Favorite, FavoriteToggle, Favorites, Product};

    // Cart
    pub use crate::cart::{
        CartCapabilities, CartContext, Drawer, DrawerCallback, Observable, Subscription,
    };
}
