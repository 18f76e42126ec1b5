//! # Tracker trait — the adapter boundary.
//!
//! A `Tracker` is one third-party analytics service, such as Google Analytics
//! or Intercom, that ultimately receives the caller's identities, events, and
//! page visits. The dispatcher never knows anything about a backend beyond
//! this trait; all wire-level concerns (batching, retries, auth, deadlines)
//! live inside the adapter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TrackerError;
use crate::events::Event;
use crate::types::{Identity, Page};

/// Shared handle to a tracker (`Arc<dyn Tracker>`), suitable for the registry.
pub type TrackerRef = Arc<dyn Tracker>;

/// # One third-party analytics backend.
///
/// Registered with a [`Dispatcher`](crate::Dispatcher) under [`Tracker::id`];
/// registering a second tracker under the same id replaces the first.
///
/// ### Implementation requirements
/// - `identify` is fire-and-forget: swallow or log internal failures, never
///   panic — the dispatcher offers it no error channel.
/// - `track`/`page` completion means the backend accepted or attempted
///   delivery, not end-to-end wire success.
/// - A hung future stalls the whole aggregate fan-out; enforce your own
///   deadlines.
#[async_trait]
pub trait Tracker: Send + Sync + 'static {
    /// Stable identifier, unique within one dispatcher.
    ///
    /// Prefer short, descriptive names (e.g. "ga", "intercom", "http-sink").
    fn id(&self) -> &str;

    /// Informs the backend of the current user's identity.
    ///
    /// Synchronous and best-effort. Called once per dispatcher `identify`
    /// fan-out with the exact value the caller supplied.
    fn identify(&self, identity: &Identity);

    /// Records one event with the backend.
    ///
    /// Capability-limited backends should reduce the event's arguments with
    /// [`select_args`](crate::select_args) rather than failing on extras.
    async fn track(&self, event: &dyn Event) -> Result<(), TrackerError>;

    /// Records one page visit with the backend.
    async fn page(&self, page: &Page) -> Result<(), TrackerError>;
}
