//! Instance holders: realized instances or not-yet-evaluated suppliers.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// A type-erased, shareable resource instance.
///
/// Destructor implementations downcast this back to the concrete handle type
/// they were registered for.
pub type ResourceInstance = Arc<dyn Any + Send + Sync>;

/// Supplier evaluated at most once to produce an instance.
type Supplier = Box<dyn FnOnce() -> ResourceInstance + Send>;

/// Value stored for a resource key: either a realized instance or a deferred
/// supplier that has not been evaluated yet.
///
/// Clones share the same underlying state, so realizing a deferred holder
/// through one clone is visible through every other.
#[derive(Clone)]
pub struct InstanceHolder {
    inner: Arc<Inner>,
}

enum Inner {
    Ready(ResourceInstance),
    Deferred(Mutex<DeferredCell>),
}

struct DeferredCell {
    supplier: Option<Supplier>,
    instance: Option<ResourceInstance>,
}

impl InstanceHolder {
    /// Holder around an already-realized instance.
    pub fn ready<T: Any + Send + Sync>(instance: T) -> Self {
        Self::from_instance(Arc::new(instance))
    }

    /// Holder around an already type-erased instance.
    #[must_use]
    pub fn from_instance(instance: ResourceInstance) -> Self {
        Self {
            inner: Arc::new(Inner::Ready(instance)),
        }
    }

    /// Holder around a supplier that has not run yet.
    pub fn deferred<F>(supplier: F) -> Self
    where
        F: FnOnce() -> ResourceInstance + Send + 'static,
    {
        Self {
            inner: Arc::new(Inner::Deferred(Mutex::new(DeferredCell {
                supplier: Some(Box::new(supplier)),
                instance: None,
            }))),
        }
    }

    /// Evaluate the supplier if it has not run yet and return the instance.
    ///
    /// This is the creation subsystem's operation; the teardown engine never
    /// forces evaluation.
    pub fn realize(&self) -> ResourceInstance {
        match &*self.inner {
            Inner::Ready(instance) => Arc::clone(instance),
            Inner::Deferred(cell) => {
                let mut cell = cell.lock();
                if let Some(instance) = &cell.instance {
                    return Arc::clone(instance);
                }
                let supplier = cell
                    .supplier
                    .take()
                    .expect("supplier already consumed without a realized instance");
                let instance = supplier();
                cell.instance = Some(Arc::clone(&instance));
                instance
            }
        }
    }

    /// The realized instance, if realization ever happened.
    ///
    /// Never evaluates a pending supplier. `None` means the resource was
    /// declared but nothing was ever brought up behind it.
    #[must_use]
    pub fn realized(&self) -> Option<ResourceInstance> {
        match &*self.inner {
            Inner::Ready(instance) => Some(Arc::clone(instance)),
            Inner::Deferred(cell) => cell.lock().instance.clone(),
        }
    }

    /// Whether a realized instance is available.
    #[must_use]
    pub fn is_realized(&self) -> bool {
        match &*self.inner {
            Inner::Ready(_) => true,
            Inner::Deferred(cell) => cell.lock().instance.is_some(),
        }
    }
}

impl fmt::Debug for InstanceHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHolder")
            .field("realized", &self.is_realized())
            .finish()
    }
}
