//! Per-pass uniqueness tracking for resource keys.

use std::collections::HashSet;

use drydock_api::ResourceKey;

/// Tracks which keys a single teardown pass has already handled.
///
/// A test class can declare the same qualified type at several sites,
/// directly or through inherited fields. Only the first such site may
/// trigger destruction; the rest would fire duplicate events and try to
/// destroy an already-removed entry. The tracker is created fresh for each
/// pass and dropped at its end.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    seen: HashSet<ResourceKey>,
}

impl ScopeTracker {
    /// Create a tracker with no keys recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per key: records `key` on first sight and reports
    /// every later sighting as a duplicate.
    pub fn is_unique_in_scope(&mut self, key: &ResourceKey) -> bool {
        self.seen.insert(key.clone())
    }
}
