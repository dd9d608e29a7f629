//! Error types for rtneural-core.
//!
//! Only construction, loading and restore paths return errors. `forward()` has
//! no failure mode.

use crate::compat::String;
use thiserror::Error;

/// Error type for rtneural-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid layer size: {what} must be positive")]
    InvalidSize { what: &'static str },

    #[error("{what}: expected {expected} rows, got {actual}")]
    RowCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what}: row {row} has {actual} values, expected {expected}")]
    RowLength {
        what: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{what}: expected {expected} values, got {actual}")]
    ValueCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
