//! Cart drawer visibility.

use crate::cart::{Observable, Subscription};

/// Visibility of the cart drawer panel. Starts closed.
#[derive(Debug, Clone, Default)]
pub struct Drawer {
    open: Observable<bool>,
}

impl Drawer {
    /// Create a closed drawer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the drawer. Subscribers are notified only if it was closed.
    pub fn open(&self) {
        self.set(true);
    }

    /// Hide the drawer.
    pub fn close(&self) {
        self.set(false);
    }

    /// Check if the drawer is shown.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Watch visibility changes.
    pub fn subscribe(&self) -> Subscription<bool> {
        self.open.subscribe()
    }

    fn set(&self, open: bool) {
        self.open.update_if(|current| {
            let changed = *current != open;
            *current = open;
            changed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let drawer = Drawer::new();
        assert!(!drawer.is_open());
        drawer.open();
        assert!(drawer.is_open());
        drawer.close();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_repeat_open_notifies_once() {
        let drawer = Drawer::new();
        let mut sub = drawer.subscribe();

        drawer.open();
        assert!(sub.current());
        drawer.open();
        assert!(!sub.has_changed());
    }
}
