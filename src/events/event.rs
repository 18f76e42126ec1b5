//! # The event record and its type-erased view.
//!
//! [`TrackedEvent<T>`] is the record application code constructs once per
//! emitted user action: a name, a category, a typed argument shape `T`, and
//! the priority order capability-limited backends reduce by. Construction
//! validates the record and rejects contract violations before anything
//! reaches a backend.
//!
//! [`Event`] erases `T` so the dispatcher and `dyn Tracker` adapters can
//! handle any event uniformly; every `TrackedEvent<T>` implements it.
//!
//! # Example
//! ```
//! use crosslytics::{Event, EventArgs, TrackedEvent, Value};
//!
//! struct PanelArgs {
//!     id: String,
//!     color: Option<String>,
//! }
//!
//! impl EventArgs for PanelArgs {
//!     fn keys() -> &'static [&'static str] {
//!         &["Panel ID", "Panel Color"]
//!     }
//!     fn values(&self) -> Vec<(&'static str, Value)> {
//!         let mut out = vec![("Panel ID", Value::from(self.id.as_str()))];
//!         if let Some(color) = &self.color {
//!             out.push(("Panel Color", Value::from(color.as_str())));
//!         }
//!         out
//!     }
//! }
//!
//! let event = TrackedEvent::new(
//!     "DashboardPanel Created",
//!     "Dashboard",
//!     PanelArgs { id: "p-1".into(), color: None },
//!     ["Panel ID", "Panel Color"],
//! ).unwrap();
//!
//! assert_eq!(event.name(), "DashboardPanel Created");
//! assert_eq!(event.args().len(), 1);
//! ```

use std::borrow::Cow;

use crate::error::EventError;
use crate::types::Value;

use super::EventArgs;

/// # Type-erased event view.
///
/// What a [`Tracker`](crate::Tracker) receives: name, category, the
/// arguments present on the instance, and the priority order. Adapters that
/// can only submit some arguments combine this with
/// [`select_args`](crate::select_args).
pub trait Event: Send + Sync {
    /// Human-readable event name (noun + past-tense verb works well).
    fn name(&self) -> &str;

    /// Grouping label for the event.
    fn category(&self) -> &str;

    /// The key/value pairs present on this instance, optional fields omitted.
    fn args(&self) -> Vec<(&'static str, Value)>;

    /// Declared argument keys, most important first.
    fn arg_priority(&self) -> &[&'static str];
}

/// # One user action, parameterized by its argument shape.
///
/// Read-only after construction; the dispatcher and every tracker only
/// borrow it for the duration of one `track` fan-out.
///
/// [`TrackedEvent::new`] fails fast on contract violations instead of letting
/// a partially-valid event reach a backend:
/// - empty `name` or `category`;
/// - an `arg_priority` key the shape does not declare (keys may be *optional*
///   on instances, but they must exist in [`EventArgs::keys`]).
#[derive(Clone, Debug)]
pub struct TrackedEvent<T: EventArgs> {
    name: Cow<'static, str>,
    category: Cow<'static, str>,
    args: T,
    arg_priority: Vec<&'static str>,
}

impl<T: EventArgs> TrackedEvent<T> {
    /// Creates a validated event.
    ///
    /// # Errors
    /// Returns [`EventError::EmptyName`] / [`EventError::EmptyCategory`] for
    /// blank labels, and [`EventError::UnknownPriorityKey`] when
    /// `arg_priority` names a key outside `T::keys()`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        category: impl Into<Cow<'static, str>>,
        args: T,
        arg_priority: impl Into<Vec<&'static str>>,
    ) -> Result<Self, EventError> {
        let name = name.into();
        let category = category.into();
        let arg_priority = arg_priority.into();

        if name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        if category.trim().is_empty() {
            return Err(EventError::EmptyCategory);
        }
        if let Some(&key) = arg_priority.iter().find(|k| !T::keys().contains(k)) {
            return Err(EventError::UnknownPriorityKey { key });
        }

        Ok(Self {
            name,
            category,
            args,
            arg_priority,
        })
    }

    /// The typed argument shape.
    pub fn shape(&self) -> &T {
        &self.args
    }
}

impl<T: EventArgs> Event for TrackedEvent<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn args(&self) -> Vec<(&'static str, Value)> {
        self.args.values()
    }

    fn arg_priority(&self) -> &[&'static str] {
        &self.arg_priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ColorArgs {
        color: String,
    }

    impl EventArgs for ColorArgs {
        fn keys() -> &'static [&'static str] {
            &["Color"]
        }

        fn values(&self) -> Vec<(&'static str, Value)> {
            vec![("Color", Value::Text(self.color.clone()))]
        }
    }

    fn color_args() -> ColorArgs {
        ColorArgs {
            color: "Green".into(),
        }
    }

    #[test]
    fn test_valid_event_exposes_erased_view() {
        let ev =
            TrackedEvent::new("Test Event", "Test Category", color_args(), ["Color"]).unwrap();
        assert_eq!(ev.name(), "Test Event");
        assert_eq!(ev.category(), "Test Category");
        assert_eq!(ev.arg_priority(), ["Color"]);
        assert_eq!(ev.args(), vec![("Color", Value::Text("Green".into()))]);
        assert_eq!(ev.shape().color, "Green");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = TrackedEvent::new("", "Test Category", color_args(), ["Color"]).unwrap_err();
        assert_eq!(err, EventError::EmptyName);

        let err = TrackedEvent::new("  ", "Test Category", color_args(), ["Color"]).unwrap_err();
        assert_eq!(err, EventError::EmptyName);
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = TrackedEvent::new("Test Event", "", color_args(), ["Color"]).unwrap_err();
        assert_eq!(err, EventError::EmptyCategory);
    }

    #[test]
    fn test_undeclared_priority_key_rejected() {
        let err =
            TrackedEvent::new("Test Event", "Test Category", color_args(), ["Shade"]).unwrap_err();
        assert_eq!(err, EventError::UnknownPriorityKey { key: "Shade" });
        assert_eq!(err.as_label(), "event_unknown_priority_key");
    }

    #[test]
    fn test_priority_may_be_shorter_than_shape() {
        // Declaring no priority at all is valid; reduction then selects nothing.
        let ev = TrackedEvent::new("Test Event", "Test Category", color_args(), []).unwrap();
        assert!(ev.arg_priority().is_empty());
    }
}
