//! Event contracts: the typed event record and argument handling.
//!
//! ## Contents
//! - [`TrackedEvent`] — the generic event record callers construct per action
//! - [`Event`] — the object-safe view trackers receive
//! - [`EventArgs`] — the argument-shape trait an event parameterizes over
//! - [`ArgKind`], [`SelectedArg`], [`select_args`] — priority-ordered argument
//!   reduction for capability-limited backends
//!
//! ## Quick reference
//! Callers declare an argument shape (a struct implementing [`EventArgs`]),
//! build a [`TrackedEvent`] over it (validated fail-fast), and hand it to
//! [`Dispatcher::track`](crate::Dispatcher::track). Adapters that cannot
//! accept every argument call [`select_args`] with their capability buckets.

mod args;
mod event;

pub use args::{select_args, ArgKind, EventArgs, SelectedArg};
pub use event::{Event, TrackedEvent};
