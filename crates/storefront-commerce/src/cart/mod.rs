//! Shopping cart module.
//!
//! Contains the observable cart state, drawer visibility and the cart
//! capability bundle.

mod context;
mod drawer;
mod observable;

pub use context::{CartCapabilities, CartContext, DrawerCallback};
pub use drawer::Drawer;
pub use observable::{Observable, Subscription};
