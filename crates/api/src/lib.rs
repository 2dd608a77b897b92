//! # Drydock contracts
//!
//! The vocabulary shared between the teardown engine and its external
//! collaborators: resource type descriptors, qualified keys, declaration
//! sites, instance holders, the destructor contract, and lifecycle events.
//!
//! Resource *creation* lives elsewhere; these types only describe what was
//! declared and what is currently held, so the engine can take it down.

pub mod destructor;
pub mod event;
pub mod holder;
pub mod key;
pub mod site;
pub mod typing;

pub use destructor::{DestroyError, Destructor};
pub use event::{TeardownEvent, TeardownObserver};
pub use holder::{InstanceHolder, ResourceInstance};
pub use key::{Qualifier, ResourceKey};
pub use site::{DeclarationSite, SiteOrigin};
pub use typing::{ResourceType, ResourceTypeId};
