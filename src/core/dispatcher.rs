//! # Dispatcher - registry plus fan-out.
//!
//! [`Dispatcher`] is the main API entry point. Callers register tracker
//! adapters once at startup, then issue one `identify` / `track` / `page`
//! call per user action; the dispatcher forwards each call to every
//! registered tracker.
//!
//! ## Fan-out semantics
//! - Every fan-out snapshots the registry at call time; trackers registered
//!   or deregistered while the fan-out is in flight do not affect it.
//! - `identify` calls each tracker synchronously and returns once all calls
//!   have been issued; it never waits on tracker work.
//! - `track`/`page` start every tracker's future before awaiting any of them,
//!   then join: the aggregate completes only after ALL complete, and fails if
//!   any failed (all-or-nothing). Every tracker still receives the call and
//!   runs to completion even when a sibling fails; only the first failure in
//!   snapshot order is reported.
//! - No ordering across trackers is promised, and no cancellation or timeout
//!   exists at this layer.
//!
//! Implementers wanting per-tracker resilience wrap isolation/retry policies
//! inside the adapter, not here; the dispatcher is a thin join point and does
//! not catch, translate, or retry tracker errors.

use futures::future;

use crate::error::DispatchError;
use crate::events::Event;
use crate::trackers::TrackerRef;
use crate::types::{Identity, Page};

use super::registry::TrackerRegistry;

/// Fans `identify` / `track` / `page` calls out to all registered trackers.
///
/// Each instance owns its registry; independent dispatchers share no state.
///
/// # Example
/// ```no_run
/// # async fn wiring(ga: crosslytics::TrackerRef, intercom: crosslytics::TrackerRef) {
/// use crosslytics::{Dispatcher, Identity};
///
/// let dispatcher = Dispatcher::new();
/// dispatcher.register(ga).await;
/// dispatcher.register(intercom).await;
///
/// dispatcher.identify(&Identity::new("u-42")).await;
/// # }
/// ```
pub struct Dispatcher {
    registry: TrackerRegistry,
}

impl Dispatcher {
    /// Creates a dispatcher with no trackers registered.
    pub fn new() -> Self {
        Self {
            registry: TrackerRegistry::new(),
        }
    }

    /// Registers a tracker under its [`id`](crate::Tracker::id).
    ///
    /// Idempotent: an id already present is replaced (last-write-wins), never
    /// an error. The replaced instance receives no further calls.
    pub async fn register(&self, tracker: TrackerRef) {
        self.registry.insert(tracker).await;
    }

    /// Deregisters the tracker under `id`, if any. Absent ids are a no-op.
    pub async fn deregister(&self, id: &str) {
        self.registry.remove(id).await;
    }

    /// Returns the sorted list of registered tracker ids.
    pub async fn tracker_ids(&self) -> Vec<String> {
        self.registry.ids().await
    }

    /// Number of registered trackers.
    pub async fn len(&self) -> usize {
        self.registry.len().await
    }

    /// Returns true if no tracker is registered.
    pub async fn is_empty(&self) -> bool {
        self.registry.is_empty().await
    }

    /// Calls `identify` on every registered tracker with the exact value.
    ///
    /// Each tracker is invoked synchronously, exactly once, in snapshot order
    /// (no ordering promised). Returns once all calls have been issued;
    /// `identify` is fire-and-forget at the contract boundary, so there is
    /// nothing to wait for and no error channel.
    pub async fn identify(&self, identity: &Identity) {
        for tracker in self.registry.snapshot().await {
            tracker.identify(identity);
        }
    }

    /// Calls `track` on every registered tracker and joins all completions.
    ///
    /// # Errors
    /// If any tracker's operation failed, the whole call fails with
    /// [`DispatchError::TrackerFailed`] for the first failure in snapshot
    /// order - after every tracker's future has run to completion.
    pub async fn track(&self, event: &dyn Event) -> Result<(), DispatchError> {
        let trackers = self.registry.snapshot().await;
        let results = future::join_all(trackers.iter().map(|t| t.track(event))).await;
        Self::first_failure(&trackers, results)
    }

    /// Calls `page` on every registered tracker and joins all completions.
    ///
    /// Accepts anything convertible into a [`Page`], so a bare URL string is
    /// equivalent to `Page::new(url)`.
    ///
    /// # Errors
    /// Same all-or-nothing join as [`Dispatcher::track`].
    pub async fn page(&self, page: impl Into<Page>) -> Result<(), DispatchError> {
        let page = page.into();
        let trackers = self.registry.snapshot().await;
        let results = future::join_all(trackers.iter().map(|t| t.page(&page))).await;
        Self::first_failure(&trackers, results)
    }

    /// Maps joined per-tracker results onto the aggregate outcome.
    fn first_failure(
        trackers: &[TrackerRef],
        results: Vec<Result<(), crate::error::TrackerError>>,
    ) -> Result<(), DispatchError> {
        for (tracker, result) in trackers.iter().zip(results) {
            if let Err(source) = result {
                return Err(DispatchError::TrackerFailed {
                    tracker: tracker.id().to_string(),
                    source,
                });
            }
        }
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
