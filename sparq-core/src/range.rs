//! Half-open bit index ranges

use std::fmt;

/// Half-open range `[start, end)` of bit indices within a register
///
/// Ranges address a contiguous run of bits in a [`BitString`]. A range is
/// valid for an `n`-bit string when `start <= end` and `end <= n`; the empty
/// range `[k, k)` is valid.
///
/// [`BitString`]: crate::BitString
///
/// # Example
/// ```
/// use sparq_core::BitRange;
///
/// let r = BitRange::new(2, 5);
/// assert_eq!(r.width(), 3);
/// assert!(r.is_valid_for(8));
/// assert!(!r.is_valid_for(4));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BitRange {
    pub start: usize,
    pub end: usize,
}

impl BitRange {
    /// Create a new bit range `[start, end)`
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bits covered by the range
    ///
    /// Zero for empty or inverted ranges.
    #[inline]
    pub const fn width(&self) -> usize {
        if self.end >= self.start {
            self.end - self.start
        } else {
            0
        }
    }

    /// Whether the range is well-formed and fits an `n`-bit string
    #[inline]
    pub const fn is_valid_for(&self, n: usize) -> bool {
        self.start <= self.end && self.end <= n
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<(usize, usize)> for BitRange {
    #[inline]
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}
