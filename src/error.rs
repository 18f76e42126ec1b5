//! Error types used by the dispatcher, events, and tracker adapters.
//!
//! This module defines three error enums:
//!
//! - [`EventError`] — contract violations rejected when a
//!   [`TrackedEvent`](crate::TrackedEvent) is constructed.
//! - [`TrackerError`] — failures an adapter surfaces from its asynchronous
//!   `track`/`page` operations.
//! - [`DispatchError`] — the aggregate failure of one fan-out call, carrying
//!   the id of the tracker that failed.
//!
//! All types provide `as_label()` for logging/metrics; [`TrackerError`]
//! additionally exposes [`TrackerError::is_retryable`] for adapter-side retry
//! policies (the dispatcher itself never retries).

use thiserror::Error;

/// # Contract violations in event construction.
///
/// These are defects in application/event-catalog code, rejected fail-fast at
/// [`TrackedEvent::new`](crate::TrackedEvent::new) rather than letting a
/// partially-valid event reach any backend.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventError {
    /// Event `name` was empty.
    #[error("event name must not be empty")]
    EmptyName,

    /// Event `category` was empty.
    #[error("event category must not be empty")]
    EmptyCategory,

    /// `arg_priority` names a key the event's argument shape does not declare.
    #[error("argument priority key '{key}' is not declared by the event's argument shape")]
    UnknownPriorityKey {
        /// The offending priority key.
        key: &'static str,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use crosslytics::EventError;
    ///
    /// assert_eq!(EventError::EmptyName.as_label(), "event_empty_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::EmptyName => "event_empty_name",
            EventError::EmptyCategory => "event_empty_category",
            EventError::UnknownPriorityKey { .. } => "event_unknown_priority_key",
        }
    }
}

/// # Failures surfaced by tracker adapters.
///
/// Returned from a tracker's asynchronous `track`/`page` operations.
/// Completion of those operations means the backend accepted or attempted
/// delivery; wire-level guarantees are the adapter's concern, so these
/// variants describe the adapter's own view of the failure.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The backend rejected the submission (bad payload, quota, auth).
    /// Retrying the same submission is not expected to succeed.
    #[error("backend rejected the submission: {message}")]
    Rejected {
        /// Adapter-provided detail.
        message: String,
    },

    /// The backend could not be reached or answered with a transient failure.
    #[error("backend unavailable: {message}")]
    Unavailable {
        /// Adapter-provided detail.
        message: String,
    },
}

impl TrackerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TrackerError::Rejected { .. } => "tracker_rejected",
            TrackerError::Unavailable { .. } => "tracker_unavailable",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TrackerError::Rejected { message } => format!("rejected: {message}"),
            TrackerError::Unavailable { message } => format!("unavailable: {message}"),
        }
    }

    /// Indicates whether the failure is safe to retry **in the adapter**.
    ///
    /// The dispatcher never retries; this helper exists for adapter-side
    /// isolation/retry policies.
    ///
    /// # Example
    /// ```
    /// use crosslytics::TrackerError;
    ///
    /// let transient = TrackerError::Unavailable { message: "503".into() };
    /// assert!(transient.is_retryable());
    ///
    /// let hard = TrackerError::Rejected { message: "bad payload".into() };
    /// assert!(!hard.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, TrackerError::Unavailable { .. })
    }
}

/// # Aggregate failure of one fan-out call.
///
/// `track`/`page` join every registered tracker's operation and fail as a
/// whole if any single tracker failed (all-or-nothing). The error carries the
/// first failing tracker's id in snapshot order; trackers that succeeded in
/// the same fan-out are not reported.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// One registered tracker's operation failed.
    #[error("tracker '{tracker}' failed: {source}")]
    TrackerFailed {
        /// Id of the tracker whose operation failed.
        tracker: String,
        /// The underlying adapter error.
        #[source]
        source: TrackerError,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::TrackerFailed { .. } => "dispatch_tracker_failed",
        }
    }

    /// Id of the tracker that caused the aggregate failure.
    pub fn tracker(&self) -> &str {
        match self {
            DispatchError::TrackerFailed { tracker, .. } => tracker,
        }
    }
}
