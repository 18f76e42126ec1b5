//! # Tracker registry - keyed map with snapshot semantics.
//!
//! The registry is the dispatcher's only shared mutable state: a map from
//! tracker id to [`TrackerRef`], guarded by an async `RwLock`.
//!
//! ## Rules
//! - At most one entry per id; inserting an existing id replaces the old
//!   instance (last-write-wins), which then receives no further calls.
//! - Removing an absent id is a silent no-op, never an error.
//! - `snapshot()` clones the current set of handles under a read lock; an
//!   in-flight fan-out works on its snapshot and is unaffected by concurrent
//!   register/deregister.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::trackers::TrackerRef;

/// Keyed set of registered trackers.
pub(crate) struct TrackerRegistry {
    trackers: RwLock<HashMap<String, TrackerRef>>,
}

impl TrackerRegistry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self {
            trackers: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a tracker under its own id, replacing any previous entry.
    pub(crate) async fn insert(&self, tracker: TrackerRef) {
        let id = tracker.id().to_string();
        let mut trackers = self.trackers.write().await;
        trackers.insert(id, tracker);
    }

    /// Removes the tracker registered under `id`, if any.
    pub(crate) async fn remove(&self, id: &str) {
        let mut trackers = self.trackers.write().await;
        trackers.remove(id);
    }

    /// Clones the current set of handles.
    ///
    /// Iteration order is the map's order; callers get no ordering promise.
    pub(crate) async fn snapshot(&self) -> Vec<TrackerRef> {
        let trackers = self.trackers.read().await;
        trackers.values().cloned().collect()
    }

    /// Returns the sorted list of registered ids.
    pub(crate) async fn ids(&self) -> Vec<String> {
        let trackers = self.trackers.read().await;
        let mut ids: Vec<String> = trackers.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered trackers.
    pub(crate) async fn len(&self) -> usize {
        self.trackers.read().await.len()
    }

    /// Returns true if no tracker is registered.
    pub(crate) async fn is_empty(&self) -> bool {
        self.trackers.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::error::TrackerError;
    use crate::events::Event;
    use crate::trackers::Tracker;
    use crate::types::{Identity, Page};

    struct Noop(&'static str);

    #[async_trait]
    impl Tracker for Noop {
        fn id(&self) -> &str {
            self.0
        }

        fn identify(&self, _identity: &Identity) {}

        async fn track(&self, _event: &dyn Event) -> Result<(), TrackerError> {
            Ok(())
        }

        async fn page(&self, _page: &Page) -> Result<(), TrackerError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_insert_is_keyed_by_id() {
        let reg = TrackerRegistry::new();
        reg.insert(Arc::new(Noop("a"))).await;
        reg.insert(Arc::new(Noop("b"))).await;
        reg.insert(Arc::new(Noop("a"))).await;

        assert_eq!(reg.len().await, 2);
        assert_eq!(reg.ids().await, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let reg = TrackerRegistry::new();
        reg.insert(Arc::new(Noop("a"))).await;

        reg.remove("missing").await;
        assert_eq!(reg.len().await, 1);

        reg.remove("a").await;
        reg.remove("a").await;
        assert!(reg.is_empty().await);
    }

    #[tokio::test]
    async fn test_snapshot_is_isolated_from_mutation() {
        let reg = TrackerRegistry::new();
        reg.insert(Arc::new(Noop("a"))).await;

        let snap = reg.snapshot().await;
        reg.remove("a").await;
        reg.insert(Arc::new(Noop("b"))).await;

        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].id(), "a");
    }
}
