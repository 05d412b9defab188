//! Comparator predicates and the search-oracle trait
//!
//! The predicates here are the pure functions used to mark branches during
//! amplitude amplification: they read designated sub-ranges of a basis string
//! and never mutate anything. Bit sequences compare as big-endian integers,
//! which for equal widths is plain lexicographic slice comparison.

use crate::bitstring::BitString;
use crate::error::OracleError;
use crate::range::BitRange;
use crate::Result;

/// Compare two equal-width sub-ranges of the same basis string
///
/// Returns true iff the bits in `lhs` are strictly greater than the bits in
/// `rhs`, both read as big-endian integers.
///
/// # Errors
/// - [`OracleError::RangeMismatch`] if the ranges have different widths
/// - [`OracleError::IndexOutOfBounds`] if either range exceeds the string
///
/// # Example
/// ```
/// use sparq_core::{range_greater_than, BitRange, BitString};
///
/// let bits = BitString::from_bits(&[1, 0, 0, 1]);
/// assert!(range_greater_than(&bits, BitRange::new(0, 2), BitRange::new(2, 4)).unwrap());
/// ```
pub fn range_greater_than(bits: &BitString, lhs: BitRange, rhs: BitRange) -> Result<bool> {
    check_bounds(bits, lhs)?;
    check_bounds(bits, rhs)?;
    if lhs.width() != rhs.width() {
        return Err(OracleError::RangeMismatch {
            left: lhs.width(),
            right: rhs.width(),
        });
    }
    Ok(bits.slice(lhs) > bits.slice(rhs))
}

/// Compare a sub-range of a basis string against a literal integer
///
/// Returns true iff the bits in `bound` are strictly greater than the
/// big-endian encoding of `value` at the same width.
///
/// # Errors
/// - [`OracleError::IndexOutOfBounds`] if the range exceeds the string
/// - [`OracleError::RangeMismatch`] if `value` does not fit in the range width
pub fn fixed_value_greater_than(bits: &BitString, bound: BitRange, value: u64) -> Result<bool> {
    check_bounds(bits, bound)?;
    let width = bound.width();
    let pattern = BitString::from_value(width, value).ok_or(OracleError::RangeMismatch {
        left: width,
        right: 64 - value.leading_zeros() as usize,
    })?;
    Ok(bits.slice(bound) > pattern.bits())
}

fn check_bounds(bits: &BitString, range: BitRange) -> Result<()> {
    if !range.is_valid_for(bits.len()) {
        return Err(OracleError::IndexOutOfBounds {
            start: range.start,
            end: range.end,
            len: bits.len(),
        });
    }
    Ok(())
}

/// Predicate used to mark branches during amplitude amplification
///
/// An oracle reads one basis string: the search range being amplified
/// (`input`) and any auxiliary ranges it compares against (`aux`). A `true`
/// result marks the branch for a sign flip.
pub trait Oracle {
    /// Evaluate the oracle on one basis string
    fn evaluate(&self, bits: &BitString, input: BitRange, aux: &[BitRange]) -> Result<bool>;
}

/// Adapter turning a plain closure into an [`Oracle`]
///
/// # Example
/// ```
/// use sparq_core::{BitRange, BitString, FnOracle, Oracle};
///
/// let parity = FnOracle(|bits: &BitString, input: BitRange, _aux: &[BitRange]| {
///     Ok(bits.slice(input).iter().sum::<u8>() % 2 == 1)
/// });
/// let bits = BitString::from_bits(&[1, 0]);
/// assert!(parity.evaluate(&bits, BitRange::new(0, 2), &[]).unwrap());
/// ```
pub struct FnOracle<F>(pub F);

impl<F> Oracle for FnOracle<F>
where
    F: Fn(&BitString, BitRange, &[BitRange]) -> Result<bool>,
{
    fn evaluate(&self, bits: &BitString, input: BitRange, aux: &[BitRange]) -> Result<bool> {
        (self.0)(bits, input, aux)
    }
}

/// Oracle marking branches whose search range exceeds the first auxiliary
/// range
///
/// # Example
/// ```
/// use sparq_core::{BitRange, BitString, Oracle, RangeGreaterThan};
///
/// let bits = BitString::from_bits(&[1, 1, 0, 1]);
/// let marked = RangeGreaterThan
///     .evaluate(&bits, BitRange::new(0, 2), &[BitRange::new(2, 4)])
///     .unwrap();
/// assert!(marked); // 11 = 3 > 01 = 1
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct RangeGreaterThan;

impl Oracle for RangeGreaterThan {
    fn evaluate(&self, bits: &BitString, input: BitRange, aux: &[BitRange]) -> Result<bool> {
        let rhs = aux.first().copied().ok_or(OracleError::MissingAuxRange)?;
        range_greater_than(bits, input, rhs)
    }
}

/// Oracle marking branches whose search range exceeds a fixed threshold
#[derive(Copy, Clone, Debug)]
pub struct FixedValueGreaterThan {
    threshold: u64,
}

impl FixedValueGreaterThan {
    /// Create an oracle comparing against `threshold`
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// The threshold value
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }
}

impl Oracle for FixedValueGreaterThan {
    fn evaluate(&self, bits: &BitString, input: BitRange, _aux: &[BitRange]) -> Result<bool> {
        fixed_value_greater_than(bits, input, self.threshold)
    }
}
