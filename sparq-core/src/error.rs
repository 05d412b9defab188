//! Error types for comparator oracles

use thiserror::Error;

/// Errors that can occur while evaluating a comparator oracle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The two compared ranges have different widths
    #[error("range width mismatch: {left} vs {right} bits")]
    RangeMismatch { left: usize, right: usize },

    /// A range does not fit inside the basis string
    #[error("bit range [{start}, {end}) out of bounds for {len}-bit string")]
    IndexOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A range-vs-range oracle was invoked without an auxiliary range
    #[error("comparison oracle requires an auxiliary bit range")]
    MissingAuxRange,
}
