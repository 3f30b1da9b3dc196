//! Cart capability bundle.

use crate::cart::{Drawer, Observable};
use crate::catalog::{format_price, Product};
use crate::ids::ProductId;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Zero-argument drawer control.
pub type DrawerCallback = Arc<dyn Fn() + Send + Sync>;

/// Cart mutation and drawer control, as handed to UI consumers.
pub trait CartCapabilities {
    /// Put the product in the cart. Returns `true` when the cart changed.
    fn add_to_cart(&self, product: &mut Product) -> bool;

    /// Take the product out of the cart. Returns `true` when the cart changed.
    fn remove_from_cart(&self, product: &mut Product) -> bool;

    /// Show the cart drawer.
    fn open_drawer(&self);

    /// Hide the cart drawer.
    fn close_drawer(&self);
}

/// Shared cart state bundled with its mutation and drawer operations.
///
/// Every clone observes and mutates the same cart.
#[derive(Clone)]
pub struct CartContext {
    cart: Observable<Vec<Product>>,
    open_drawer: DrawerCallback,
    close_drawer: DrawerCallback,
}

impl CartContext {
    /// Bundle a cart with caller-supplied drawer controls.
    pub fn new(
        cart: Observable<Vec<Product>>,
        open_drawer: DrawerCallback,
        close_drawer: DrawerCallback,
    ) -> Self {
        Self {
            cart,
            open_drawer,
            close_drawer,
        }
    }

    /// Bundle a cart with drawer controls that drive `drawer`.
    pub fn with_drawer(cart: Observable<Vec<Product>>, drawer: &Drawer) -> Self {
        let opener = drawer.clone();
        let closer = drawer.clone();
        Self::new(
            cart,
            Arc::new(move || opener.open()),
            Arc::new(move || closer.close()),
        )
    }

    /// The shared cart.
    pub fn cart(&self) -> &Observable<Vec<Product>> {
        &self.cart
    }

    /// Check if a product with this id is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.cart.with(|items| items.iter().any(|p| p.id() == id))
    }

    /// Number of cart entries.
    pub fn len(&self) -> usize {
        self.cart.with(Vec::len)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.with(Vec::is_empty)
    }

    /// Sum of the prices of the cart entries.
    pub fn total_price(&self) -> f64 {
        self.cart.with(|items| items.iter().map(|p| p.price).sum())
    }

    /// Format the cart total the way `Product::price_display` formats a price.
    pub fn total_display(&self, symbol: &str) -> String {
        format_price(symbol, self.total_price())
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.cart.update_if(|items| {
            let changed = !items.is_empty();
            items.clear();
            changed
        });
    }
}

impl CartCapabilities for CartContext {
    fn add_to_cart(&self, product: &mut Product) -> bool {
        product.is_added = true;
        let item = product.clone();
        let added = self.cart.update_if(|items| {
            if items.iter().any(|p| p.id() == item.id()) {
                false
            } else {
                items.push(item);
                true
            }
        });
        debug!(product_id = %product.id(), added, "add to cart");
        added
    }

    fn remove_from_cart(&self, product: &mut Product) -> bool {
        product.is_added = false;
        let id = product.id();
        let removed = self.cart.update_if(|items| {
            let before = items.len();
            items.retain(|p| p.id() != id);
            items.len() < before
        });
        debug!(product_id = %id, removed, "remove from cart");
        removed
    }

    fn open_drawer(&self) {
        (self.open_drawer)();
    }

    fn close_drawer(&self) {
        (self.close_drawer)();
    }
}

impl fmt::Debug for CartContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartContext")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
