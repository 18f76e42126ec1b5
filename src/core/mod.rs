//! Dispatcher core: tracker registry and fan-out.
//!
//! The only public API from this module is [`Dispatcher`], which owns the
//! registry of trackers and fans `identify` / `track` / `page` calls out to
//! every registered backend.
//!
//! Internal modules:
//! - [`registry`]: keyed tracker map with snapshot semantics;
//! - [`dispatcher`]: the fan-out facade and aggregate join.

mod dispatcher;
mod registry;

pub use dispatcher::Dispatcher;
