//! Fixed-length basis strings
//!
//! A [`BitString`] is the key type of the sparse register: one classical
//! configuration of all qubits. Strings are compared lexicographically, which
//! for equal lengths coincides with big-endian integer order, so sorting a
//! collection of basis strings yields the canonical basis enumeration.

use crate::range::BitRange;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity: registers this size or smaller never touch the heap
const INLINE_BITS: usize = 32;

/// Fixed-length sequence of bits representing one basis state
///
/// Bits are stored most-significant first: `bit(0)` is the leftmost bit of
/// the rendered string and the highest-order bit of [`to_value`].
///
/// [`to_value`]: BitString::to_value
///
/// # Example
/// ```
/// use sparq_core::BitString;
///
/// let bits = BitString::from_value(4, 9).unwrap();
/// assert_eq!(format!("{}", bits), "1001");
/// assert_eq!(bits.to_value(), 9);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitString(SmallVec<[u8; INLINE_BITS]>);

impl BitString {
    /// All-zero string of the given length
    pub fn zeros(len: usize) -> Self {
        Self(SmallVec::from_elem(0, len))
    }

    /// Build from a slice of bits
    ///
    /// # Panics
    /// Panics if any element is not 0 or 1.
    pub fn from_bits(bits: &[u8]) -> Self {
        assert!(bits.iter().all(|&b| b <= 1), "bits must be 0 or 1");
        Self(SmallVec::from_slice(bits))
    }

    /// Big-endian encoding of `value` into exactly `width` bits
    ///
    /// Returns `None` if the value does not fit.
    pub fn from_value(width: usize, value: u64) -> Option<Self> {
        if width < 64 && value >> width != 0 {
            return None;
        }
        let mut bits = SmallVec::from_elem(0u8, width);
        for (i, bit) in bits.iter_mut().enumerate() {
            let shift = width - 1 - i;
            if shift < 64 {
                *bit = ((value >> shift) & 1) as u8;
            }
        }
        Some(Self(bits))
    }

    /// Number of bits
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string has zero length
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bit at position `i` (0 = leftmost)
    #[inline]
    pub fn bit(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// All bits as a slice
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// The bits covered by `range` as a slice
    ///
    /// # Panics
    /// Panics if the range is not valid for this string.
    #[inline]
    pub fn slice(&self, range: BitRange) -> &[u8] {
        &self.0[range.start..range.end]
    }

    /// Copy of the bits covered by `range` as an owned string
    pub fn extract(&self, range: BitRange) -> BitString {
        Self(SmallVec::from_slice(self.slice(range)))
    }

    /// Overwrite the bits covered by `range` with `pattern`
    ///
    /// # Panics
    /// Panics if the range is invalid or the pattern width differs from the
    /// range width.
    pub fn overwrite(&mut self, range: BitRange, pattern: &BitString) {
        debug_assert_eq!(range.width(), pattern.len());
        self.0[range.start..range.end].copy_from_slice(pattern.bits());
    }

    /// Whether every bit covered by `range` is zero
    pub fn is_zero_in(&self, range: BitRange) -> bool {
        self.slice(range).iter().all(|&b| b == 0)
    }

    /// Big-endian integer value of the string
    ///
    /// Only meaningful for strings of at most 64 bits; longer strings must
    /// have their leading bits zero.
    pub fn to_value(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let bits = BitString::zeros(5);
        assert_eq!(bits.len(), 5);
        assert_eq!(bits.to_value(), 0);
        assert_eq!(format!("{}", bits), "00000");
    }

    #[test]
    fn test_from_value_round_trip() {
        let bits = BitString::from_value(4, 11).unwrap();
        assert_eq!(bits.bits(), &[1, 0, 1, 1]);
        assert_eq!(bits.to_value(), 11);

        // Leading zeros preserved
        let bits = BitString::from_value(6, 3).unwrap();
        assert_eq!(format!("{}", bits), "000011");
    }

    #[test]
    fn test_from_value_too_large() {
        assert!(BitString::from_value(3, 8).is_none());
        assert!(BitString::from_value(3, 7).is_some());
        assert!(BitString::from_value(0, 0).is_some());
        assert!(BitString::from_value(0, 1).is_none());
    }

    #[test]
    fn test_slice_and_extract() {
        let bits = BitString::from_bits(&[1, 0, 0, 1]);
        assert_eq!(bits.slice(BitRange::new(0, 2)), &[1, 0]);
        let sub = bits.extract(BitRange::new(2, 4));
        assert_eq!(sub.bits(), &[0, 1]);
        assert_eq!(sub.len(), 2);
    }

    #[test]
    fn test_overwrite() {
        let mut bits = BitString::zeros(4);
        bits.overwrite(BitRange::new(1, 3), &BitString::from_bits(&[1, 1]));
        assert_eq!(bits.bits(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_is_zero_in() {
        let bits = BitString::from_bits(&[0, 1, 0, 0]);
        assert!(bits.is_zero_in(BitRange::new(2, 4)));
        assert!(!bits.is_zero_in(BitRange::new(0, 2)));
        assert!(bits.is_zero_in(BitRange::new(1, 1)));
    }

    #[test]
    fn test_ordering_matches_integer_order() {
        let a = BitString::from_value(4, 5).unwrap();
        let b = BitString::from_value(4, 9).unwrap();
        assert!(a < b);

        let mut all: Vec<BitString> = (0..8).map(|v| BitString::from_value(3, v).unwrap()).collect();
        let sorted = all.clone();
        all.reverse();
        all.sort();
        assert_eq!(all, sorted);
    }
}
