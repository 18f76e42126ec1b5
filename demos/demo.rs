use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crosslytics::{
    select_args, ArgKind, Dispatcher, Event, EventArgs, Identity, IdentityTraits, LogTracker,
    Organization, Page, TrackedEvent, Tracker, TrackerError, Value,
};

struct PanelArgs {
    panel_id: String,
    panel_type: Option<i64>,
    panel_color: Option<String>,
}

impl EventArgs for PanelArgs {
    fn keys() -> &'static [&'static str] {
        &["Panel ID", "Panel Type", "Panel Color"]
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        let mut out = vec![("Panel ID", Value::from(self.panel_id.as_str()))];
        if let Some(ty) = self.panel_type {
            out.push(("Panel Type", Value::from(ty)));
        }
        if let Some(color) = &self.panel_color {
            out.push(("Panel Color", Value::from(color.as_str())));
        }
        out
    }
}

/// A capability-limited backend in the Google Analytics shape: it can submit
/// one string label and one numeric value per event.
struct TwoFieldSink;

#[async_trait]
impl Tracker for TwoFieldSink {
    fn id(&self) -> &str {
        "two-field"
    }

    fn identify(&self, identity: &Identity) {
        println!("two-field: hello {}", identity.user_id);
    }

    async fn track(&self, event: &dyn Event) -> Result<(), TrackerError> {
        let picked = select_args(event, &[ArgKind::Text, ArgKind::Number]);
        println!(
            "two-field: {} label={:?} value={:?}",
            event.name(),
            picked[0].as_ref().map(|a| (a.key, a.value.clone())),
            picked[1].as_ref().map(|a| (a.key, a.value.clone())),
        );
        Ok(())
    }

    async fn page(&self, page: &Page) -> Result<(), TrackerError> {
        println!("two-field: pageview {}", page.url);
        Ok(())
    }
}

/// Fails every third submission, to show the all-or-nothing aggregate.
struct Flaky {
    n: AtomicU64,
}

#[async_trait]
impl Tracker for Flaky {
    fn id(&self) -> &str {
        "flaky"
    }

    fn identify(&self, _identity: &Identity) {}

    async fn track(&self, _event: &dyn Event) -> Result<(), TrackerError> {
        let this = self.n.fetch_add(1, Ordering::Relaxed) + 1;
        if this % 3 == 0 {
            Err(TrackerError::Unavailable {
                message: format!("transient fail #{this}"),
            })
        } else {
            Ok(())
        }
    }

    async fn page(&self, _page: &Page) -> Result<(), TrackerError> {
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(LogTracker::default())).await;
    dispatcher.register(Arc::new(TwoFieldSink)).await;
    dispatcher
        .register(Arc::new(Flaky {
            n: AtomicU64::new(0),
        }))
        .await;

    let identity = Identity::new("u-42")
        .with_organization(Organization::new("org-7"))
        .with_traits(IdentityTraits::new("ada@example.com", "Ada"));
    dispatcher.identify(&identity).await;

    for i in 0..4 {
        let event = TrackedEvent::new(
            "DashboardPanel Created",
            "Dashboard",
            PanelArgs {
                panel_id: format!("p-{i}"),
                panel_type: Some(3),
                panel_color: Some("Green".into()),
            },
            ["Panel ID", "Panel Type", "Panel Color"],
        )?;

        match dispatcher.track(&event).await {
            Ok(()) => println!("event #{i} delivered to all trackers"),
            Err(e) => println!("event #{i} aggregate failed: {e}"),
        }
    }

    dispatcher
        .page(Page::new("https://example.com/dashboard").with_title("Dashboard"))
        .await?;

    Ok(())
}
