//! Catalog Record - the unit every query returns

use serde::{Deserialize, Serialize};

/// A single catalog entry: a name paired with a numeric metric.
///
/// The metric is an ordered integer attribute, typically a release year.
/// Records are immutable once constructed; queries clone them freely.
///
/// Duplicates (same name and metric) are legal and the store preserves
/// them in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    metric: i64,
}

impl Record {
    /// Create a new record.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name (e.g., a game title)
    /// * `metric` - Ordered numeric attribute (e.g., release year)
    ///
    /// # Example
    ///
    /// ```rust
    /// use ludoteca::catalog::Record;
    ///
    /// let record = Record::new("Doom", 1993);
    /// assert_eq!(record.name(), "Doom");
    /// assert_eq!(record.metric(), 1993);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, metric: i64) -> Self {
        Self {
            name: name.into(),
            metric,
        }
    }

    /// Get the record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the numeric metric.
    #[must_use]
    pub const fn metric(&self) -> i64 {
        self.metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Chrono Trigger", 1995);
        assert_eq!(record.name(), "Chrono Trigger");
        assert_eq!(record.metric(), 1995);
    }

    #[test]
    fn test_record_equality_includes_both_fields() {
        let a = Record::new("Doom", 1993);
        let b = Record::new("Doom", 1993);
        let c = Record::new("Doom", 1994);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_record_serde_shape() {
        let record = Record::new("Doom II", 1994);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Doom II","metric":1994}"#);
    }
}
