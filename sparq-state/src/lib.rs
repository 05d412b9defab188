//! Sparse quantum register simulator for amplitude-amplification search
//!
//! This crate provides the simulation engine: a sparse multi-qubit register
//! ([`SparseRegister`]) mapping basis strings to real amplitudes, the
//! primitive operations needed to emulate Grover-style search (partial
//! measurement, fixed-value injection, Hadamard spread over a sub-range,
//! probability extraction), and the amplitude-amplification step itself
//! ([`grover_iteration`]).
//!
//! Measurement randomness is injected: every sampling operation takes a
//! [`rand::Rng`], so experiments replay deterministically from a seed.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sparq_core::{BitRange, FixedValueGreaterThan};
//! use sparq_state::{grover_iteration, SparseRegister};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut reg = SparseRegister::new(2)?;
//!
//! reg.hadamard(0, 2)?;
//! grover_iteration(&mut reg, &FixedValueGreaterThan::new(2), BitRange::new(0, 2), &[])?;
//!
//! let outcome = reg.measure(0, 2, &mut rng)?;
//! assert_eq!(outcome.to_value(), 3);
//! # Ok::<(), sparq_state::StateError>(())
//! ```

pub mod error;
pub mod grover;
pub mod sparse_register;

pub use error::{Result, StateError};
pub use grover::grover_iteration;
pub use sparse_register::SparseRegister;

// Core types surface here too so downstream callers need only one import
pub use sparq_core::{BitRange, BitString, Oracle, OracleError};
