//! Core types for the sparq sparse quantum register simulator
//!
//! This crate provides the fundamental types shared by the simulator stack:
//! - [`BitString`]: fixed-length basis-string keys
//! - [`BitRange`]: half-open bit index ranges
//! - [`Oracle`]: trait for search-oracle predicates, with comparator
//!   implementations ([`RangeGreaterThan`], [`FixedValueGreaterThan`])
//!
//! # Example
//! ```
//! use sparq_core::{range_greater_than, BitRange, BitString};
//!
//! let bits = BitString::from_bits(&[1, 0, 0, 1]);
//! // [1,0] = 2 vs [0,1] = 1
//! let gt = range_greater_than(&bits, BitRange::new(0, 2), BitRange::new(2, 4)).unwrap();
//! assert!(gt);
//! ```

pub mod bitstring;
pub mod comparator;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use bitstring::BitString;
pub use comparator::{
    fixed_value_greater_than, range_greater_than, FixedValueGreaterThan, FnOracle, Oracle,
    RangeGreaterThan,
};
pub use error::OracleError;
pub use range::BitRange;

/// Type alias for results in sparq-core
pub type Result<T> = std::result::Result<T, OracleError>;
