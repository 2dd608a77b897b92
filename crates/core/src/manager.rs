//! The teardown pass: dedup, destructor resolution, destruction, events.

use std::fmt;
use std::sync::Arc;

use drydock_api::{
    DeclarationSite, DestroyError, Destructor, InstanceHolder, ResourceKey, TeardownEvent,
};

use crate::error::{Error, Result};
use crate::notifier::LifecycleNotifier;
use crate::registry::DestructorRegistry;
use crate::scope::ScopeTracker;
use crate::store::ContextStore;

/// Which lifecycle boundary a pass runs for. The pass itself is identical;
/// this only shows up in logs.
#[derive(Debug, Clone, Copy)]
enum ScopeKind {
    Class,
    Method,
}

impl ScopeKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

/// Destroys scoped resources at lifecycle boundaries.
///
/// Holds the run-wide [`ContextStore`] and [`DestructorRegistry`]; when the
/// host runner executes classes or methods concurrently, each thread gets its
/// own manager over the same shared pair.
pub struct TeardownManager {
    store: Arc<ContextStore>,
    registry: Arc<DestructorRegistry>,
    notifier: LifecycleNotifier,
}

impl TeardownManager {
    /// Create a manager over the shared store and registry.
    #[must_use]
    pub fn new(store: Arc<ContextStore>, registry: Arc<DestructorRegistry>) -> Self {
        Self {
            store,
            registry,
            notifier: LifecycleNotifier::new(),
        }
    }

    /// The notifier delivering before/after events for this manager.
    #[must_use]
    pub fn notifier(&self) -> &LifecycleNotifier {
        &self.notifier
    }

    /// Destroy the class-scoped resources declared by `sites`, the
    /// field-based declarations of a just-finished test class.
    ///
    /// # Errors
    ///
    /// [`Error::NoDestructor`] if the registry has nothing compatible with a
    /// site's type, [`Error::Destruction`] if a destructor fails with
    /// anything other than the not-instantiated outcome. Either aborts the
    /// remaining sites of this pass.
    pub fn destroy_class_scoped(&self, sites: &[DeclarationSite]) -> Result<()> {
        self.destroy_scoped(ScopeKind::Class, sites)
    }

    /// Destroy the method-scoped resources declared by `sites`, the
    /// parameter-based declarations of a just-finished test method.
    ///
    /// # Errors
    ///
    /// Same conditions as [`destroy_class_scoped`](Self::destroy_class_scoped).
    pub fn destroy_method_scoped(&self, sites: &[DeclarationSite]) -> Result<()> {
        self.destroy_scoped(ScopeKind::Method, sites)
    }

    /// One pass over `sites`, in list order, with a fresh per-pass tracker.
    fn destroy_scoped(&self, kind: ScopeKind, sites: &[DeclarationSite]) -> Result<()> {
        let mut tracker = ScopeTracker::new();

        for site in sites {
            let key = site.key();

            if !tracker.is_unique_in_scope(&key) {
                tracing::debug!(
                    scope = kind.as_str(),
                    resource = %key,
                    site = %site.origin(),
                    "skipping duplicate declaration of an already handled resource"
                );
                continue;
            }

            // A missing destructor is a configuration error; teardown of an
            // individual test cannot route around it, so the pass stops here.
            let registration = self.registry.resolve(site.resource_type())?;

            // No entry means setup never created this resource. Nothing to
            // destroy, and no events fire for the site.
            let Some(holder) = self.store.get(&key) else {
                continue;
            };

            tracing::trace!(scope = kind.as_str(), resource = %key, "firing BeforeDestroy");
            self.notifier.publish(&TeardownEvent::BeforeDestroy {
                holder: holder.clone(),
                resource_type: key.type_id(),
                qualifier: key.qualifier().clone(),
            });

            self.destroy_if_instantiated(registration.destructor(), &holder, &key)?;

            self.store.remove(&key);

            self.notifier.publish(&TeardownEvent::AfterDestroy {
                resource_type: key.type_id(),
                qualifier: key.qualifier().clone(),
            });
        }

        Ok(())
    }

    /// Run the destructor against the holder's realized instance.
    ///
    /// A holder whose deferred supplier never ran, or a destructor reporting
    /// [`DestroyError::NotInstantiated`], is a recoverable outcome: the entry
    /// is still removed and `AfterDestroy` still fires. Anything else aborts
    /// the pass before the entry is removed.
    fn destroy_if_instantiated(
        &self,
        destructor: &dyn Destructor,
        holder: &InstanceHolder,
        key: &ResourceKey,
    ) -> Result<()> {
        let Some(instance) = holder.realized() else {
            tracing::warn!(
                resource = %key,
                "ignoring destruction, the instance was never instantiated"
            );
            return Ok(());
        };

        tracing::debug!(resource = %key, "destroying resource instance");
        match destructor.destroy(instance) {
            Ok(()) => Ok(()),
            Err(DestroyError::NotInstantiated) => {
                tracing::warn!(
                    resource = %key,
                    "ignoring destruction, the instance was never instantiated"
                );
                Ok(())
            }
            Err(source) => Err(Error::Destruction {
                type_name: key.type_id().name(),
                qualifier: key.qualifier().clone(),
                source,
            }),
        }
    }
}

impl fmt::Debug for TeardownManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeardownManager")
            .field("store", &self.store)
            .field("registrations", &self.registry.len())
            .field("notifier", &self.notifier)
            .finish()
    }
}
