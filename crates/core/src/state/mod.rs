//! Reactive state cells.
//!
//! The UI-facing services publish their collections through [`Signal`] cells:
//! an explicit observer-pattern value cell over `tokio::sync::watch`. Readers
//! either take a point-in-time copy with [`Signal::get`] or subscribe for
//! change notifications with [`Signal::subscribe`].

pub mod session;

pub use session::SessionState;

use tokio::sync::watch;

/// A reactive value cell.
///
/// Cheap to share behind an `Arc`; every `set`/`update` publishes the new
/// value to all subscribers. Reads never block writers.
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("value", &self.get()).finish()
    }
}

impl<T: Clone> Signal<T> {
    /// Creates a cell holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the current value and notifies subscribers.
    pub fn set(&self, value: T) {
        let _ = self.tx.send_replace(value);
    }

    /// Mutates the current value in place and notifies subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.tx.send_modify(mutate);
    }

    /// Subscribes to value changes.
    ///
    /// The receiver observes the value at subscription time and every
    /// subsequent publication.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
