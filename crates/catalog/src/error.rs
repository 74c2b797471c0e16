//! Error types for the catalog crate.
//!
//! Every failure here happens at construction or decoding time. Nothing is
//! retried; callers fix their input and try again.

use thiserror::Error;

/// Errors that can occur while building or loading products.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A constructor argument was absent or empty
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A color or size name did not match any known variant
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON was malformed or held an invalid record
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
