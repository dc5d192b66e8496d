//! Catalog service - the query core behind an injected report sink

use tracing::debug;

use super::{Record, RecordStore};
use crate::report::{NullSink, QueryEvent, ReportSink};

/// Query service that reports its activity through an injected sink.
///
/// `Catalog` owns a [`RecordStore`] and a [`ReportSink`] received at
/// construction. It never builds a collaborator of its own: the injected
/// sink is the only place activity goes, so any conforming sink can be
/// substituted without touching the catalog. Query semantics are exactly
/// those of the underlying store.
///
/// # Example
///
/// ```rust
/// use ludoteca::catalog::{Catalog, Record, RecordStore};
/// use ludoteca::report::MemorySink;
///
/// let store = RecordStore::new(vec![Record::new("Doom", 1993)]);
/// let mut catalog = Catalog::with_sink(store, MemorySink::new());
///
/// let hits = catalog.find_by_name("Doom");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(catalog.sink().events()[0].operation(), "find_by_name");
/// ```
#[derive(Debug)]
pub struct Catalog<S: ReportSink = NullSink> {
    store: RecordStore,
    sink: S,
}

impl Catalog {
    /// Create a catalog that discards activity reports.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self::with_sink(store, NullSink)
    }
}

impl<S: ReportSink> Catalog<S> {
    /// Create a catalog reporting to the given sink.
    #[must_use]
    pub fn with_sink(store: RecordStore, sink: S) -> Self {
        Self { store, sink }
    }

    /// Get the underlying store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the injected sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Get every record whose metric equals `target`, in source order.
    pub fn find_by_metric(&mut self, target: i64) -> Vec<Record> {
        let hits = self.store.find_by_metric(target);
        self.report("find_by_metric", target.to_string(), hits.len());
        hits
    }

    /// Get every record whose name equals `target`, in source order.
    pub fn find_by_name(&mut self, target: &str) -> Vec<Record> {
        let hits = self.store.find_by_name(target);
        self.report("find_by_name", target.to_string(), hits.len());
        hits
    }

    /// Get every record whose metric is strictly less than `threshold`,
    /// in source order.
    pub fn find_older_than(&mut self, threshold: i64) -> Vec<Record> {
        let hits = self.store.find_older_than(threshold);
        self.report("find_older_than", threshold.to_string(), hits.len());
        hits
    }

    /// Get every record whose metric is strictly greater than `threshold`,
    /// in source order.
    pub fn find_newer_than(&mut self, threshold: i64) -> Vec<Record> {
        let hits = self.store.find_newer_than(threshold);
        self.report("find_newer_than", threshold.to_string(), hits.len());
        hits
    }

    fn report(&mut self, operation: &'static str, argument: String, matches: usize) {
        debug!(operation, matches, "catalog query");
        self.sink.report(&QueryEvent::new(operation, argument, matches));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            Record::new("Chrono Trigger", 1995),
            Record::new("Doom", 1993),
            Record::new("Doom II", 1994),
        ])
    }

    #[test]
    fn test_catalog_delegates_to_store() {
        let mut catalog = Catalog::new(sample_store());
        assert_eq!(
            catalog.find_by_metric(1994),
            vec![Record::new("Doom II", 1994)]
        );
        assert_eq!(catalog.find_older_than(1994).len(), 1);
    }

    #[test]
    fn test_injected_sink_sees_every_query() {
        let mut catalog = Catalog::with_sink(sample_store(), MemorySink::new());

        catalog.find_by_metric(1994);
        catalog.find_by_name("Doom");
        catalog.find_newer_than(1993);

        let events = catalog.sink().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].operation(), "find_by_metric");
        assert_eq!(events[0].argument(), "1994");
        assert_eq!(events[0].matches(), 1);
        assert_eq!(events[2].operation(), "find_newer_than");
        assert_eq!(events[2].matches(), 2);
    }
}
