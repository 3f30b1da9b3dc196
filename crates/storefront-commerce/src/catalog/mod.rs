//! Product catalog module.
//!
//! Contains types for products, favorites and the product grid.

mod catalog;
mod favorite;
mod favorites;
mod product;

pub use catalog::Catalog;
pub use favorite::Favorite;
pub use favorites::{FavoriteToggle, Favorites};
pub use product::Product;
pub(crate) use product::format_price;
