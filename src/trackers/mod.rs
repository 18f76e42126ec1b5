//! Tracker adapters for third-party analytics backends.
//!
//! This module provides the [`Tracker`] trait every backend integration
//! implements, and the shared handle type [`TrackerRef`] the dispatcher's
//! registry holds.
//!
//! ## Implementing a tracker
//! ```
//! use async_trait::async_trait;
//! use crosslytics::{Event, Identity, Page, Tracker, TrackerError};
//!
//! struct HttpSink;
//!
//! #[async_trait]
//! impl Tracker for HttpSink {
//!     fn id(&self) -> &str { "http-sink" }
//!
//!     fn identify(&self, identity: &Identity) {
//!         // enqueue internally; failures are this adapter's problem
//!         let _ = identity;
//!     }
//!
//!     async fn track(&self, event: &dyn Event) -> Result<(), TrackerError> {
//!         let _ = event;
//!         Ok(())
//!     }
//!
//!     async fn page(&self, page: &Page) -> Result<(), TrackerError> {
//!         let _ = page;
//!         Ok(())
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod tracker;

#[cfg(feature = "logging")]
pub use log::LogTracker;
pub use tracker::{Tracker, TrackerRef};
