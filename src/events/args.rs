//! # Argument shapes and priority-ordered reduction.
//!
//! Many backends only accept a limited number of event arguments. Google
//! Analytics, for example, takes two: a string label and an integer value.
//! [`select_args`] deterministically reduces a rich event to whatever slots
//! such a backend offers, driven by the event's declared argument priority.
//!
//! ## Rules
//! - The priority list is the total order; keys outside it are never selected.
//! - Keys absent from the instance (optional fields not supplied) are skipped.
//! - Each present value fills the first unfilled slot of a matching kind;
//!   once a kind's slots are filled, later candidates of that kind are ignored.
//! - Selection stops early once every slot is filled; leftovers are dropped
//!   silently. Capability-limited backends are expected to lose fidelity.
//!
//! ## Example
//! ```
//! use crosslytics::{select_args, ArgKind, EventArgs, TrackedEvent, Value};
//!
//! struct Args {
//!     size: i64,
//!     color: String,
//! }
//!
//! impl EventArgs for Args {
//!     fn keys() -> &'static [&'static str] {
//!         &["Size", "Color"]
//!     }
//!     fn values(&self) -> Vec<(&'static str, Value)> {
//!         vec![("Size", self.size.into()), ("Color", self.color.as_str().into())]
//!     }
//! }
//!
//! let event = TrackedEvent::new(
//!     "Panel Resized",
//!     "Dashboard",
//!     Args { size: 5, color: "Green".into() },
//!     ["Size", "Color"],
//! ).unwrap();
//!
//! // One string slot, one numeric slot — the Google Analytics shape.
//! let picked = select_args(&event, &[ArgKind::Text, ArgKind::Number]);
//! assert_eq!(picked[0].as_ref().unwrap().key, "Color");
//! assert_eq!(picked[1].as_ref().unwrap().value, Value::Int(5));
//! ```

use crate::types::Value;

use super::Event;

/// # Typed argument shape of an event.
///
/// Implementors declare the full key set of the shape (including optional
/// keys) and produce the key/value pairs actually present on one instance.
/// `()` implements this for argument-less events.
///
/// # Example
/// ```
/// use crosslytics::{EventArgs, Value};
///
/// struct PanelArgs {
///     id: String,
///     color: Option<String>,
/// }
///
/// impl EventArgs for PanelArgs {
///     fn keys() -> &'static [&'static str] {
///         &["Panel ID", "Panel Color"]
///     }
///
///     fn values(&self) -> Vec<(&'static str, Value)> {
///         let mut out = vec![("Panel ID", Value::from(self.id.as_str()))];
///         if let Some(color) = &self.color {
///             out.push(("Panel Color", Value::from(color.as_str())));
///         }
///         out
///     }
/// }
/// ```
pub trait EventArgs: Send + Sync {
    /// Every argument key the shape declares, optional keys included.
    ///
    /// `arg_priority` entries are validated against this set when a
    /// [`TrackedEvent`](crate::TrackedEvent) is constructed.
    fn keys() -> &'static [&'static str]
    where
        Self: Sized;

    /// The key/value pairs present on this instance.
    ///
    /// Optional fields that were not supplied must be omitted, not emitted as
    /// [`Value::Null`].
    fn values(&self) -> Vec<(&'static str, Value)>;
}

/// Argument-less events.
impl EventArgs for () {
    fn keys() -> &'static [&'static str] {
        &[]
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }
}

/// One capability slot a backend offers, classified by value kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Accepts [`Value::Text`].
    Text,
    /// Accepts [`Value::Int`] or [`Value::Float`].
    Number,
    /// Accepts [`Value::Bool`].
    Flag,
    /// Accepts [`Value::Date`].
    Timestamp,
}

impl ArgKind {
    /// Whether a value can fill a slot of this kind.
    ///
    /// [`Value::Null`] fills nothing.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ArgKind::Text => value.is_text(),
            ArgKind::Number => value.is_numeric(),
            ArgKind::Flag => value.is_flag(),
            ArgKind::Timestamp => value.is_timestamp(),
        }
    }
}

/// One argument chosen by [`select_args`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedArg {
    /// The declared argument key.
    pub key: &'static str,
    /// The value present on the event instance.
    pub value: Value,
}

/// Reduces an event's arguments to a backend's capability slots.
///
/// `slots[i]` describes what the backend's i-th field accepts; the returned
/// vector answers position-for-position, `None` where no prioritized argument
/// of that kind was present. The walk follows the event's
/// [`arg_priority`](Event::arg_priority) order and stops as soon as every
/// slot is filled.
///
/// Two slots of the same kind take the first two matching candidates in
/// priority order.
pub fn select_args(event: &dyn Event, slots: &[ArgKind]) -> Vec<Option<SelectedArg>> {
    let mut picked: Vec<Option<SelectedArg>> = vec![None; slots.len()];
    if slots.is_empty() {
        return picked;
    }

    let args = event.args();
    let mut filled = 0usize;

    for &key in event.arg_priority() {
        let Some((_, value)) = args.iter().find(|(k, _)| *k == key) else {
            continue;
        };

        let slot = slots
            .iter()
            .enumerate()
            .find(|(i, kind)| picked[*i].is_none() && kind.matches(value));

        if let Some((i, _)) = slot {
            picked[i] = Some(SelectedArg {
                key,
                value: value.clone(),
            });
            filled += 1;
            if filled == slots.len() {
                break;
            }
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TrackedEvent;

    struct Abc {
        a: Option<i64>,
        b: Option<i64>,
        c: Option<String>,
    }

    impl EventArgs for Abc {
        fn keys() -> &'static [&'static str] {
            &["A", "B", "C"]
        }

        fn values(&self) -> Vec<(&'static str, Value)> {
            let mut out = Vec::new();
            if let Some(a) = self.a {
                out.push(("A", Value::Int(a)));
            }
            if let Some(b) = self.b {
                out.push(("B", Value::Int(b)));
            }
            if let Some(c) = &self.c {
                out.push(("C", Value::Text(c.clone())));
            }
            out
        }
    }

    fn event(a: Option<i64>, b: Option<i64>, c: Option<&str>) -> TrackedEvent<Abc> {
        TrackedEvent::new(
            "Test Event",
            "Test Category",
            Abc {
                a,
                b,
                c: c.map(str::to_string),
            },
            ["A", "B", "C"],
        )
        .unwrap()
    }

    #[test]
    fn test_absent_key_is_skipped() {
        // A is declared first but absent: B fills the numeric slot, C the text one.
        let ev = event(None, Some(5), Some("x"));
        let picked = select_args(&ev, &[ArgKind::Text, ArgKind::Number]);

        let text = picked[0].as_ref().unwrap();
        assert_eq!(text.key, "C");
        assert_eq!(text.value, Value::Text("x".into()));

        let num = picked[1].as_ref().unwrap();
        assert_eq!(num.key, "B");
        assert_eq!(num.value, Value::Int(5));
    }

    #[test]
    fn test_first_match_wins_per_kind() {
        // Both A and B are numeric; A has higher priority, B is dropped.
        let ev = event(Some(1), Some(2), None);
        let picked = select_args(&ev, &[ArgKind::Number]);
        assert_eq!(picked[0].as_ref().unwrap().key, "A");
    }

    #[test]
    fn test_duplicate_kind_slots_fill_in_priority_order() {
        let ev = event(Some(1), Some(2), None);
        let picked = select_args(&ev, &[ArgKind::Number, ArgKind::Number]);
        assert_eq!(picked[0].as_ref().unwrap().key, "A");
        assert_eq!(picked[1].as_ref().unwrap().key, "B");
    }

    #[test]
    fn test_unfillable_slot_stays_empty() {
        let ev = event(Some(1), None, None);
        let picked = select_args(&ev, &[ArgKind::Text, ArgKind::Number]);
        assert!(picked[0].is_none());
        assert_eq!(picked[1].as_ref().unwrap().key, "A");
    }

    #[test]
    fn test_no_slots_selects_nothing() {
        let ev = event(Some(1), Some(2), Some("x"));
        assert!(select_args(&ev, &[]).is_empty());
    }

    #[test]
    fn test_null_fills_no_slot() {
        assert!(!ArgKind::Text.matches(&Value::Null));
        assert!(!ArgKind::Number.matches(&Value::Null));
        assert!(!ArgKind::Flag.matches(&Value::Null));
        assert!(!ArgKind::Timestamp.matches(&Value::Null));
    }

    #[test]
    fn test_unit_args_have_no_keys() {
        let ev = TrackedEvent::new("Ping", "Health", (), []).unwrap();
        let picked = select_args(&ev, &[ArgKind::Text]);
        assert!(picked[0].is_none());
    }
}
