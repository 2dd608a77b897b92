//! Observer registration and event publication.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use drydock_api::{TeardownEvent, TeardownObserver};

/// Fans teardown events out to registered observers.
///
/// Delivery is synchronous and in subscription order. The notifier makes no
/// promises about observer behavior: a panicking observer propagates to the
/// caller.
#[derive(Default)]
pub struct LifecycleNotifier {
    observers: RwLock<Vec<Arc<dyn TeardownObserver>>>,
}

impl LifecycleNotifier {
    /// Create a notifier with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&self, observer: Arc<dyn TeardownObserver>) {
        self.observers.write().push(observer);
    }

    /// Register a closure as an observer.
    pub fn subscribe_fn<F>(&self, f: F)
    where
        F: Fn(&TeardownEvent) + Send + Sync + 'static,
    {
        struct FnObserver<F>(F);

        impl<F: Fn(&TeardownEvent) + Send + Sync> TeardownObserver for FnObserver<F> {
            fn on_event(&self, event: &TeardownEvent) {
                (self.0)(event);
            }
        }

        self.subscribe(Arc::new(FnObserver(f)));
    }

    /// Publish `event` to every observer, in subscription order.
    pub fn publish(&self, event: &TeardownEvent) {
        // Snapshot under the lock, deliver outside it, so an observer can
        // subscribe re-entrantly without deadlocking.
        let observers: Vec<Arc<dyn TeardownObserver>> = self.observers.read().clone();
        for observer in &observers {
            observer.on_event(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

impl fmt::Debug for LifecycleNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleNotifier")
            .field("observer_count", &self.observer_count())
            .finish()
    }
}
