//! Error types for ludoteca
//!
//! The query core is total: every query accepts every argument and returns
//! a plain value. Errors exist only at the edges - parsing a JSON seed and
//! requiring a capability a release does not carry.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Ludoteca error types
#[derive(Error, Debug)]
pub enum Error {
    /// A release was asked for a capability it does not implement.
    ///
    /// Raised only by the `require_*` boundary accessors. Callers that can
    /// tolerate absence should use the `as_*` presence queries instead.
    #[error("release '{release}' does not support capability '{capability}'")]
    CapabilityUnsupported {
        /// Name of the missing capability
        capability: &'static str,
        /// Title of the release that was queried
        release: String,
    },

    /// JSON seed parsing error
    #[error("seed parse error: {0}")]
    Serialization(#[from] serde_json::Error),
}
