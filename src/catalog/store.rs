//! Record Store - in-memory storage for catalog records
//!
//! This module provides the query core: an ordered collection of records,
//! fixed at construction, answering equality and ordering queries.
//!
//! ## Design
//!
//! The store keeps the records in a vector (source order is the only
//! ordering the API exposes) and builds hash-map indices by metric and by
//! name for O(1) equality lookups. Index buckets hold ascending positions,
//! so indexed results are indistinguishable from a stable linear filter.
//!
//! ## Ordering
//!
//! Every query returns matches in source order. Duplicates are preserved;
//! nothing is ever sorted or deduplicated.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::Record;
use crate::release::Release;
use crate::Result;

/// In-memory store answering order-preserving queries over catalog records.
///
/// The collection is owned exclusively by the store and never mutated after
/// construction, so shared references are freely usable across threads.
///
/// ## Queries
///
/// Four queries, all total (every argument is valid, a miss is an empty
/// vector) and all O(n) or better:
///
/// - [`find_by_metric`](Self::find_by_metric) - metric equality
/// - [`find_by_name`](Self::find_by_name) - exact name equality
/// - [`find_older_than`](Self::find_older_than) - metric strictly below
/// - [`find_newer_than`](Self::find_newer_than) - metric strictly above
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    by_metric: FxHashMap<i64, Vec<usize>>,
    by_name: FxHashMap<String, Vec<usize>>,
}

impl RecordStore {
    /// Create a store over the given records.
    ///
    /// Source order is preserved for the lifetime of the store and defines
    /// the order of every query result.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut by_metric: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
        let mut by_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();

        for (position, record) in records.iter().enumerate() {
            by_metric.entry(record.metric()).or_default().push(position);
            by_name
                .entry(record.name().to_string())
                .or_default()
                .push(position);
        }

        Self {
            records,
            by_metric,
            by_name,
        }
    }

    /// Create a store from a JSON array of records held in memory.
    ///
    /// The seed is a serialized `[{"name": ..., "metric": ...}, ...]`
    /// array. Nothing is read from or written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if the
    /// seed is not a valid JSON array of records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ludoteca::catalog::RecordStore;
    ///
    /// let store = RecordStore::from_json(
    ///     r#"[{"name":"Doom","metric":1993},{"name":"Doom II","metric":1994}]"#,
    /// )?;
    /// assert_eq!(store.len(), 2);
    /// # Ok::<(), ludoteca::Error>(())
    /// ```
    pub fn from_json(seed: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(seed)?;
        Ok(Self::new(records))
    }

    /// Create a store over the catalog records of a release family.
    ///
    /// Each release contributes its embedded [`Record`]; release order is
    /// preserved as source order.
    #[must_use]
    pub fn from_releases(releases: &[Release]) -> Self {
        Self::new(releases.iter().map(|r| r.record().clone()).collect())
    }

    /// Get the number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the records in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get every record whose metric equals `target`, in source order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ludoteca::catalog::{Record, RecordStore};
    ///
    /// let store = RecordStore::new(vec![
    ///     Record::new("Chrono Trigger", 1995),
    ///     Record::new("Doom", 1993),
    ///     Record::new("Doom II", 1994),
    /// ]);
    ///
    /// let hits = store.find_by_metric(1994);
    /// assert_eq!(hits, vec![Record::new("Doom II", 1994)]);
    /// ```
    #[must_use]
    pub fn find_by_metric(&self, target: i64) -> Vec<Record> {
        let hits = self.clone_positions(self.by_metric.get(&target));
        trace!(metric = target, matches = hits.len(), "find_by_metric");
        hits
    }

    /// Get every record whose name equals `target` exactly, in source order.
    #[must_use]
    pub fn find_by_name(&self, target: &str) -> Vec<Record> {
        let hits = self.clone_positions(self.by_name.get(target));
        trace!(name = target, matches = hits.len(), "find_by_name");
        hits
    }

    /// Get every record whose metric is strictly less than `threshold`,
    /// in source order.
    #[must_use]
    pub fn find_older_than(&self, threshold: i64) -> Vec<Record> {
        let hits: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.metric() < threshold)
            .cloned()
            .collect();
        trace!(threshold, matches = hits.len(), "find_older_than");
        hits
    }

    /// Get every record whose metric is strictly greater than `threshold`,
    /// in source order.
    #[must_use]
    pub fn find_newer_than(&self, threshold: i64) -> Vec<Record> {
        let hits: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.metric() > threshold)
            .cloned()
            .collect();
        trace!(threshold, matches = hits.len(), "find_newer_than");
        hits
    }

    /// Clone the records at the given index bucket, empty on a miss.
    ///
    /// Buckets hold ascending positions, so source order is preserved.
    fn clone_positions(&self, positions: Option<&Vec<usize>>) -> Vec<Record> {
        positions.map_or_else(Vec::new, |bucket| {
            bucket.iter().map(|&i| self.records[i].clone()).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordStore {
        RecordStore::new(vec![
            Record::new("Chrono Trigger", 1995),
            Record::new("Doom", 1993),
            Record::new("Doom II", 1994),
        ])
    }

    #[test]
    fn test_store_default_is_empty() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_find_by_metric_exact() {
        let store = sample();
        assert_eq!(
            store.find_by_metric(1994),
            vec![Record::new("Doom II", 1994)]
        );
        assert!(store.find_by_metric(2001).is_empty());
    }

    #[test]
    fn test_find_by_name_exact_match_only() {
        let store = sample();
        assert_eq!(store.find_by_name("Doom"), vec![Record::new("Doom", 1993)]);
        // Prefixes must not match
        assert!(store.find_by_name("Doo").is_empty());
    }

    #[test]
    fn test_ordering_thresholds_are_strict() {
        let store = sample();
        assert_eq!(
            store.find_older_than(1994),
            vec![Record::new("Doom", 1993)]
        );
        assert_eq!(
            store.find_newer_than(1993),
            vec![
                Record::new("Chrono Trigger", 1995),
                Record::new("Doom II", 1994),
            ]
        );
    }

    #[test]
    fn test_duplicates_preserved_in_source_order() {
        let store = RecordStore::new(vec![
            Record::new("Doom", 1993),
            Record::new("Quake", 1996),
            Record::new("Doom", 1993),
        ]);

        let hits = store.find_by_name("Doom");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], hits[1]);

        assert_eq!(store.find_by_metric(1993).len(), 2);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let store = sample();
        let before: Vec<Record> = store.records().to_vec();
        let _ = store.find_by_metric(1995);
        let _ = store.find_older_than(2000);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_from_json_seed() {
        let store = RecordStore::from_json(
            r#"[{"name":"Myst","metric":1993},{"name":"Riven","metric":1997}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_name("Riven"), vec![Record::new("Riven", 1997)]);
    }

    #[test]
    fn test_from_json_rejects_malformed_seed() {
        let result = RecordStore::from_json(r#"{"name":"not an array"}"#);
        assert!(result.is_err());
    }
}
