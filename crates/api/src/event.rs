//! Lifecycle events emitted around each destroy attempt.

use crate::holder::InstanceHolder;
use crate::key::Qualifier;
use crate::typing::ResourceTypeId;

/// Notification published by the teardown engine.
///
/// `BeforeDestroy` always fires before the destroy attempt; `AfterDestroy`
/// only once an attempt has been made (successful or gracefully skipped) and
/// the store entry is gone. Neither fires for sites filtered out by in-scope
/// deduplication or whose store entry is absent.
#[derive(Debug, Clone)]
pub enum TeardownEvent {
    /// About to attempt destruction of the held resource.
    BeforeDestroy {
        /// The holder about to be destroyed, possibly still unrealized.
        holder: InstanceHolder,
        /// Type identity of the resource.
        resource_type: ResourceTypeId,
        /// Qualifier of the resource.
        qualifier: Qualifier,
    },
    /// A destroy attempt completed and the store entry was removed.
    AfterDestroy {
        /// Type identity of the resource.
        resource_type: ResourceTypeId,
        /// Qualifier of the resource.
        qualifier: Qualifier,
    },
}

impl TeardownEvent {
    /// Type identity the event concerns.
    #[must_use]
    pub fn resource_type(&self) -> ResourceTypeId {
        match self {
            Self::BeforeDestroy { resource_type, .. } | Self::AfterDestroy { resource_type, .. } => {
                *resource_type
            }
        }
    }

    /// Qualifier the event concerns.
    #[must_use]
    pub fn qualifier(&self) -> &Qualifier {
        match self {
            Self::BeforeDestroy { qualifier, .. } | Self::AfterDestroy { qualifier, .. } => {
                qualifier
            }
        }
    }
}

/// External observer of teardown lifecycle events.
///
/// Called synchronously, in subscription order. Delivery order relative to
/// the destroy attempt is guaranteed; what observers do with it is their own
/// concern, and the engine does not contain observer failures.
pub trait TeardownObserver: Send + Sync {
    /// Handle one published event.
    fn on_event(&self, event: &TeardownEvent);
}
