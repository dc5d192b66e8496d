//! Catalog - records, the query store, and the reporting service
//!
//! ## Overview
//!
//! ```text
//! Record (name, metric) ──owned by──> RecordStore ──wrapped by──> Catalog
//!                                                                    │
//!                                                   ReportSink <─────┘ (injected)
//! ```
//!
//! [`RecordStore`] is the query core: fixed collection, four total
//! queries, source order preserved. [`Catalog`] layers activity reporting
//! on top through an injected [`ReportSink`](crate::report::ReportSink).
//!
//! ## Usage
//!
//! ```rust
//! use ludoteca::catalog::{Record, RecordStore};
//!
//! let store = RecordStore::new(vec![
//!     Record::new("Chrono Trigger", 1995),
//!     Record::new("Doom", 1993),
//!     Record::new("Doom II", 1994),
//! ]);
//!
//! assert_eq!(store.find_newer_than(1993).len(), 2);
//! ```

mod record;
mod service;
mod store;

pub use record::Record;
pub use service::Catalog;
pub use store::RecordStore;
