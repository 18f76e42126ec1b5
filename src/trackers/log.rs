//! # Simple logging tracker for debugging and demos.
//!
//! [`LogTracker`] prints every call to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [identify] user=u-42 org=Some("org-7")
//! [track] event="DashboardPanel Created" category="Dashboard" args=1
//! [page] url=https://example.com title=Some("Homepage")
//! ```

use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::TrackerError;
use crate::events::Event;
use crate::trackers::Tracker;
use crate::types::{Identity, Page};

/// Simple stdout logging tracker.
///
/// Enabled via the `logging` feature. Prints human-readable descriptions of
/// every fan-out call for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Tracker`] for a
/// real backend or structured logging.
pub struct LogTracker {
    id: Cow<'static, str>,
}

impl LogTracker {
    /// Creates a logging tracker registered under the given id.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for LogTracker {
    /// Uses the id `"log"`.
    fn default() -> Self {
        Self::new("log")
    }
}

#[async_trait]
impl Tracker for LogTracker {
    fn id(&self) -> &str {
        &self.id
    }

    fn identify(&self, identity: &Identity) {
        println!(
            "[identify] user={} org={:?}",
            identity.user_id,
            identity
                .organization
                .as_ref()
                .map(|o| o.organization_id.as_str())
        );
    }

    async fn track(&self, event: &dyn Event) -> Result<(), TrackerError> {
        println!(
            "[track] event={:?} category={:?} args={}",
            event.name(),
            event.category(),
            event.args().len()
        );
        Ok(())
    }

    async fn page(&self, page: &Page) -> Result<(), TrackerError> {
        println!("[page] url={} title={:?}", page.url, page.title);
        Ok(())
    }
}
