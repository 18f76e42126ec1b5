//! # crosslytics
//!
//! **Crosslytics** is an in-process analytics-event multiplexer for Rust.
//!
//! Application code issues one `identify` / `track` / `page` call per user
//! action; the [`Dispatcher`] fans that call out to every registered
//! third-party analytics backend ("tracker"). New backends are added by
//! implementing the [`Tracker`] trait, with no change to the dispatcher.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ identify(id) │   │ track(event) │   │  page(url)   │
//!     │   (caller)   │   │   (caller)   │   │   (caller)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                │
//! │  - TrackerRegistry (id → Arc<dyn Tracker>, last-write-wins)│
//! │  - snapshot per call: in-flight fan-outs are isolated      │
//! │    from concurrent register/deregister                     │
//! └──────┬──────────────────┬──────────────────┬───────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Tracker    │   │   Tracker    │   │   Tracker    │
//!     │ (backend #1) │   │ (backend #2) │   │ (backend #N) │
//!     └──────────────┘   └──────────────┘   └──────────────┘
//!
//! identify: invoked synchronously on each tracker, fire-and-forget.
//! track/page: every tracker's future is started, then joined; the
//! aggregate completes only after ALL complete, and fails if any failed
//! (all-or-nothing).
//! ```
//!
//! ## Semantics
//! - **Registration** is keyed by [`Tracker::id`]. Registering an id twice
//!   replaces the prior instance (last-write-wins, never an error);
//!   deregistering an absent id is a no-op.
//! - **No ordering guarantee**: trackers must not depend on call order
//!   relative to one another within a fan-out.
//! - **No cancellation or timeout** at this layer: a hung tracker stalls the
//!   corresponding aggregate call. Adapters own deadlines, retries, batching
//!   and every other wire-level concern.
//! - **Capability-limited backends** (e.g. one string plus one numeric field)
//!   reduce an event's arguments deterministically with [`select_args`],
//!   driven by the event's [`arg_priority`](Event::arg_priority) order.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use crosslytics::{
//!     Dispatcher, Event, EventArgs, Identity, Page, TrackedEvent, Tracker,
//!     TrackerError, Value,
//! };
//!
//! struct PanelArgs {
//!     panel_id: String,
//!     panel_type: Option<i64>,
//! }
//!
//! impl EventArgs for PanelArgs {
//!     fn keys() -> &'static [&'static str] {
//!         &["Panel ID", "Panel Type"]
//!     }
//!
//!     fn values(&self) -> Vec<(&'static str, Value)> {
//!         let mut out = vec![("Panel ID", Value::from(self.panel_id.as_str()))];
//!         if let Some(ty) = self.panel_type {
//!             out.push(("Panel Type", Value::from(ty)));
//!         }
//!         out
//!     }
//! }
//!
//! struct Console;
//!
//! #[async_trait]
//! impl Tracker for Console {
//!     fn id(&self) -> &str { "console" }
//!
//!     fn identify(&self, identity: &Identity) {
//!         println!("user={}", identity.user_id);
//!     }
//!
//!     async fn track(&self, event: &dyn Event) -> Result<(), TrackerError> {
//!         println!("event={} category={}", event.name(), event.category());
//!         Ok(())
//!     }
//!
//!     async fn page(&self, page: &Page) -> Result<(), TrackerError> {
//!         println!("page={}", page.url);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = Dispatcher::new();
//!     dispatcher.register(Arc::new(Console)).await;
//!
//!     dispatcher.identify(&Identity::new("user-42")).await;
//!
//!     let event = TrackedEvent::new(
//!         "DashboardPanel Created",
//!         "Dashboard",
//!         PanelArgs { panel_id: "p-1".into(), panel_type: Some(3) },
//!         ["Panel ID", "Panel Type"],
//!     )?;
//!     dispatcher.track(&event).await?;
//!
//!     dispatcher.page("https://example.com/dashboard").await?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod trackers;
mod types;

// ---- Public re-exports ----

pub use crate::core::Dispatcher;
pub use error::{DispatchError, EventError, TrackerError};
pub use events::{select_args, ArgKind, Event, EventArgs, SelectedArg, TrackedEvent};
pub use trackers::{Tracker, TrackerRef};
pub use types::{Identity, IdentityTraits, Organization, OrganizationTraits, Page, Value};

// Optional: expose a simple built-in stdout tracker (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use trackers::LogTracker;
