//! Query activity reporting - injected output capability
//!
//! Reporting is a capability handed to whichever component needs it, never
//! a global implicit channel. Library code writes no output of its own;
//! a [`ReportSink`] receives one [`QueryEvent`] per catalog query and
//! decides what to do with it.
//!
//! Three sinks ship with the crate:
//! - [`NullSink`] - discards events (the default)
//! - [`TracingSink`] - forwards events to the `tracing` facade
//! - [`MemorySink`] - collects events for inspection in tests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a single catalog query did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEvent {
    operation: String,
    argument: String,
    matches: usize,
    at: DateTime<Utc>,
}

impl QueryEvent {
    /// Create a new query event with the current timestamp.
    ///
    /// # Arguments
    ///
    /// * `operation` - Query name (e.g., "find_by_metric")
    /// * `argument` - Rendering of the query argument
    /// * `matches` - Number of records the query returned
    #[must_use]
    pub fn new(operation: impl Into<String>, argument: impl Into<String>, matches: usize) -> Self {
        Self {
            operation: operation.into(),
            argument: argument.into(),
            matches,
            at: Utc::now(),
        }
    }

    /// Get the query name.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Get the rendered query argument.
    #[must_use]
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Get the number of records the query returned.
    #[must_use]
    pub const fn matches(&self) -> usize {
        self.matches
    }

    /// Get the timestamp the event was recorded at.
    #[must_use]
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Receiver of query activity.
///
/// Implementations decide the destination; the catalog only promises one
/// event per query, in call order.
pub trait ReportSink {
    /// Receive one query event.
    fn report(&mut self, event: &QueryEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&mut self, _event: &QueryEvent) {}
}

/// Sink that forwards events to the `tracing` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&mut self, event: &QueryEvent) {
        debug!(
            operation = event.operation(),
            argument = event.argument(),
            matches = event.matches(),
            "catalog query"
        );
    }
}

/// Sink that collects events in memory, in call order.
///
/// # Example
///
/// ```rust
/// use ludoteca::report::{MemorySink, QueryEvent, ReportSink};
///
/// let mut sink = MemorySink::new();
/// sink.report(&QueryEvent::new("find_by_name", "Doom", 1));
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.events()[0].operation(), "find_by_name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<QueryEvent>,
}

impl MemorySink {
    /// Create a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the collected events in call order.
    #[must_use]
    pub fn events(&self) -> &[QueryEvent] {
        &self.events
    }

    /// Get the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all collected events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, event: &QueryEvent) {
        self.events.push(event.clone());
    }
}
