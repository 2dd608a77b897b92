//! # Drydock teardown engine
//!
//! Destroys externally created, expensive test resources (browser sessions,
//! automation driver handles) at lifecycle boundaries. A lifecycle signal
//! source hands [`TeardownManager`] the declaration sites of a just-finished
//! test class or method; the engine destroys exactly one instance per unique
//! (type, qualifier) key, exactly once per pass, with before/after
//! notifications, tolerating resources that were declared but never
//! instantiated.
//!
//! The [`ContextStore`] and [`DestructorRegistry`] are shared across the
//! whole run; each concurrent host thread uses its own manager over them.

pub mod error;
pub mod manager;
pub mod notifier;
pub mod registry;
pub mod scope;
pub mod store;

pub use error::{Error, Result};
pub use manager::TeardownManager;
pub use notifier::LifecycleNotifier;
pub use registry::{DestructorRegistration, DestructorRegistry};
pub use scope::ScopeTracker;
pub use store::ContextStore;

pub use drydock_api as api;
