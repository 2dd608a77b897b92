//! Shared store of live and deferred resource instances.

use std::fmt;

use dashmap::DashMap;
use drydock_api::{InstanceHolder, ResourceKey};

/// Mapping from resource key to instance holder, shared across the whole
/// test run.
///
/// Creation/injection logic inserts entries; the teardown engine reads and
/// removes them. Operations are atomic per key with no cross-key ordering,
/// which is all that concurrent class/method teardown on separate threads
/// requires.
#[derive(Default)]
pub struct ContextStore {
    entries: DashMap<ResourceKey, InstanceHolder>,
}

impl ContextStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the holder for `key`, replacing any previous entry.
    pub fn insert(&self, key: ResourceKey, holder: InstanceHolder) {
        self.entries.insert(key, holder);
    }

    /// The holder for `key`, if one exists.
    ///
    /// Absence is a normal state: a declared resource whose setup never ran
    /// has no entry, and there is nothing to destroy.
    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<InstanceHolder> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Remove and return the holder for `key`.
    pub fn remove(&self, key: &ResourceKey) -> Option<InstanceHolder> {
        self.entries.remove(key).map(|(_, holder)| holder)
    }

    /// Whether an entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ContextStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextStore")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}
