//! Observable shared state.

use crate::error::CommerceError;
use std::sync::Arc;
use tokio::sync::watch;

/// A shared value whose changes are announced to subscribers.
///
/// Clones are handles onto the same value. Writes are synchronous; readers
/// learn about them through a [`Subscription`].
#[derive(Debug)]
pub struct Observable<T> {
    inner: Arc<watch::Sender<T>>,
}

impl<T> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self {
            inner: Arc::new(tx),
        }
    }

    /// Read the value in place.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Mutate the value and notify subscribers.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        self.inner.send_modify(f);
    }

    /// Mutate the value, notifying subscribers only when `f` returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.inner.send_if_modified(f)
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.inner.send_replace(value);
    }

    /// Start watching the value. The current value counts as seen.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.inner.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.receiver_count()
    }
}

impl<T: Clone> Observable<T> {
    /// Get a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving end of an [`Observable`].
///
/// A new subscription has already seen the value current at subscribe time.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Check for a modification not yet seen.
    ///
    /// Returns `false` once the observable is closed.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next modification.
    pub async fn changed(&mut self) -> Result<(), CommerceError> {
        self.rx
            .changed()
            .await
            .map_err(|_| CommerceError::ObservableClosed)
    }
}

impl<T: Clone> Subscription<T> {
    /// Get a copy of the current value and mark it as seen.
    pub fn current(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }
}
