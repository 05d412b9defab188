//! Error types for sparse register operations

use sparq_core::OracleError;
use thiserror::Error;

/// Errors that can occur during sparse register operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    /// Register constructed with zero qubits
    #[error("register must have at least one qubit")]
    InvalidSize,

    /// Bit range outside the register or inverted
    #[error("bit range [{start}, {end}) invalid for {num_qubits}-qubit register")]
    InvalidRange {
        start: usize,
        end: usize,
        num_qubits: usize,
    },

    /// Hadamard applied to a range that is not all-zero on every branch
    #[error("hadamard requires the target range to be zero on every branch")]
    PreconditionViolated,

    /// Literal value does not fit the target range
    #[error("value {value} does not fit in {width} bits")]
    ValueTooLarge { value: u64, width: usize },

    /// Every branch carries zero probability; no renormalization exists
    ///
    /// Indicates a logic error upstream (e.g. an amplitude injected over a
    /// collapsed branch); callers should treat this as fatal rather than
    /// retry.
    #[error("cannot renormalize a zero-probability state")]
    DegenerateState,

    /// An oracle predicate failed during a Grover iteration
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Result type for sparse register operations
pub type Result<T> = std::result::Result<T, StateError>;
