//! # Ludoteca: Embedded In-Memory Game Catalog
//!
//! Ludoteca is an embedded, in-memory catalog of named records with a
//! numeric metric (typically a release year). It answers equality and
//! ordering queries that preserve source order, and it exposes a small
//! typed extension surface: a capability-based release family and an
//! injected activity report sink.
//!
//! ## Design
//!
//! - **Total queries**: every query accepts every argument; a miss is an
//!   empty result, never an error.
//! - **Stable filters**: results always preserve source order, duplicates
//!   included. Secondary indices are an internal detail.
//! - **Capabilities over inheritance**: release kinds form a closed tagged
//!   family; what a release can do is asked via capability presence, not
//!   via methods that fail.
//!
//! ## Example Usage
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
//! assert_eq!(store.find_by_metric(1994), vec![Record::new("Doom II", 1994)]);
//! assert_eq!(store.find_older_than(1994), vec![Record::new("Doom", 1993)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod catalog;
pub mod error;
pub mod release;
pub mod report;

pub use error::{Error, Result};
