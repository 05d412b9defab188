//! Sparse quantum register representation
//!
//! This module provides the sparse register at the heart of the simulator: a
//! mapping from basis strings to real amplitudes, holding only the branches
//! that carry (or are about to carry) probability mass instead of a dense
//! 2^n vector. Sparse representation is particularly efficient for
//! amplitude-amplification workloads, where superposition is confined to a
//! small search sub-register and the remaining qubits stay classical.
//!
//! # Invariants
//!
//! After every public operation completes:
//! - basis strings are pairwise distinct (duplicates merge by summing)
//! - the amplitudes are normalized: Σ amp² = 1
//! - zero-amplitude branches introduced by an operation are pruned
//!
//! Amplitudes are real; oracle marking flips signs but probability is always
//! the square, so no phase bookkeeping is needed.

use crate::error::{Result, StateError};
use ahash::AHashMap;
use rand::Rng;
use sparq_core::{BitRange, BitString};
use std::fmt;

/// Amplitudes with magnitude below this are treated as zero and pruned
const ZERO_TOLERANCE: f64 = 1e-12;

/// Sparse multi-qubit register
///
/// Stores an ordered collection of (basis string, amplitude) branches. The
/// register is created in |0…0⟩ and mutated in place by the operations below;
/// the qubit count is fixed at construction.
///
/// # Example
/// ```
/// use sparq_state::SparseRegister;
///
/// let mut reg = SparseRegister::new(3).unwrap();
/// assert_eq!(reg.num_qubits(), 3);
/// assert_eq!(reg.num_branches(), 1);
/// ```
#[derive(Clone)]
pub struct SparseRegister {
    /// Number of qubits
    num_qubits: usize,

    /// Branches in store order; canonical (lexicographic) after cleanup
    branches: Vec<(BitString, f64)>,
}

impl SparseRegister {
    /// Create a new register initialized to |0…0⟩
    ///
    /// # Errors
    /// Returns [`StateError::InvalidSize`] if `num_qubits` is zero.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(StateError::InvalidSize);
        }
        Ok(Self {
            num_qubits,
            branches: vec![(BitString::zeros(num_qubits), 1.0)],
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of stored branches
    #[inline]
    pub fn num_branches(&self) -> usize {
        self.branches.len()
    }

    /// Get the branches in store order
    #[inline]
    pub fn branches(&self) -> &[(BitString, f64)] {
        &self.branches
    }

    /// Get the amplitude of a basis string (0.0 if not stored)
    pub fn amplitude(&self, bits: &BitString) -> f64 {
        self.branches
            .iter()
            .find(|(b, _)| b == bits)
            .map(|&(_, amp)| amp)
            .unwrap_or(0.0)
    }

    /// Set the amplitude of a basis string
    ///
    /// Inserts, overwrites, or (for near-zero amplitudes) removes the branch.
    /// Does not renormalize; call [`normalize`](Self::normalize) after bulk
    /// edits.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidRange`] if the string length does not
    /// match the register.
    pub fn set_amplitude(&mut self, bits: BitString, amplitude: f64) -> Result<()> {
        if bits.len() != self.num_qubits {
            return Err(StateError::InvalidRange {
                start: 0,
                end: bits.len(),
                num_qubits: self.num_qubits,
            });
        }
        match self.branches.iter().position(|(b, _)| *b == bits) {
            Some(pos) if amplitude.abs() > ZERO_TOLERANCE => self.branches[pos].1 = amplitude,
            Some(pos) => {
                self.branches.remove(pos);
            }
            None if amplitude.abs() > ZERO_TOLERANCE => self.branches.push((bits, amplitude)),
            None => {}
        }
        Ok(())
    }

    /// Compute the L2 norm of the register (1.0 when normalized)
    pub fn norm(&self) -> f64 {
        self.branches
            .iter()
            .map(|(_, amp)| amp * amp)
            .sum::<f64>()
            .sqrt()
    }

    /// Partially measure the bit range `[start, end)` and collapse
    ///
    /// Samples a branch from the cumulative probability distribution in store
    /// order, records its bits in the range as the outcome, discards every
    /// branch inconsistent with the outcome, and renormalizes.
    ///
    /// A single-branch register is measured without consuming randomness:
    /// the outcome is already determined.
    ///
    /// # Errors
    /// - [`StateError::InvalidRange`] for bad bounds
    /// - [`StateError::DegenerateState`] if collapse eliminated all
    ///   probability mass (upstream logic error)
    pub fn measure<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> Result<BitString> {
        let range = self.check_range(start, end)?;

        if self.branches.len() == 1 {
            return Ok(self.branches[0].0.extract(range));
        }

        let mut cumulative = Vec::with_capacity(self.branches.len());
        let mut total = 0.0;
        for (_, amp) in &self.branches {
            total += amp * amp;
            cumulative.push(total);
        }

        let r = rng.gen::<f64>();
        // Lower-bound search: first branch whose cumulative probability
        // reaches the sample. Clamped for the fp case where total < r.
        let idx = cumulative
            .partition_point(|&c| c < r)
            .min(self.branches.len() - 1);
        let outcome = self.branches[idx].0.extract(range);

        self.branches
            .retain(|(bits, _)| bits.slice(range) == outcome.bits());
        self.normalize()?;
        Ok(outcome)
    }

    /// Force the bit range `[start, end)` to the binary encoding of `value`
    ///
    /// The range is first collapsed via [`measure`](Self::measure) (discarding
    /// any superposition across it), then every surviving branch has the range
    /// overwritten with the fixed pattern, then duplicates are merged.
    ///
    /// # Errors
    /// - [`StateError::InvalidRange`] for bad bounds
    /// - [`StateError::ValueTooLarge`] if `value` does not fit in
    ///   `end - start` bits
    pub fn set_value<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        value: u64,
        rng: &mut R,
    ) -> Result<()> {
        let range = self.check_range(start, end)?;
        let width = range.width();
        let pattern = BitString::from_value(width, value)
            .ok_or(StateError::ValueTooLarge { value, width })?;

        self.measure(start, end, rng)?;
        for (bits, _) in &mut self.branches {
            bits.overwrite(range, &pattern);
        }
        self.cleanup();
        Ok(())
    }

    /// Spread the bit range `[start, end)` into a uniform superposition
    ///
    /// Every branch must currently be all-zero across the range. Each branch
    /// spawns `2^(end-start)` branches, one per bit pattern in the range, with
    /// amplitude scaled by `1/sqrt(2^(end-start))`. The spread is unitary, so
    /// no renormalization is needed.
    ///
    /// # Errors
    /// - [`StateError::InvalidRange`] for bad bounds
    /// - [`StateError::PreconditionViolated`] if any branch has a non-zero
    ///   bit in the range
    pub fn hadamard(&mut self, start: usize, end: usize) -> Result<()> {
        let range = self.check_range(start, end)?;
        if !self.branches.iter().all(|(bits, _)| bits.is_zero_in(range)) {
            return Err(StateError::PreconditionViolated);
        }

        let patterns = range_patterns(range.width());
        let scale = 1.0 / (patterns.len() as f64).sqrt();

        let mut spread = Vec::with_capacity(self.branches.len() * patterns.len());
        for (bits, amp) in &self.branches {
            for pattern in &patterns {
                let mut next = bits.clone();
                next.overwrite(range, pattern);
                spread.push((next, amp * scale));
            }
        }
        self.branches = spread;
        Ok(())
    }

    /// Probability table grouped by the bits in `[start, end)`
    ///
    /// Groups all branches that agree on the range and sums their amplitude
    /// squares. Sorted by group key. Read-only; the register is not mutated.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidRange`] for bad bounds.
    pub fn probabilities(&self, start: usize, end: usize) -> Result<Vec<(BitString, f64)>> {
        let range = self.check_range(start, end)?;

        let mut groups: AHashMap<BitString, f64> = AHashMap::new();
        for (bits, amp) in &self.branches {
            *groups.entry(bits.extract(range)).or_insert(0.0) += amp * amp;
        }

        let mut table: Vec<(BitString, f64)> = groups.into_iter().collect();
        table.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(table)
    }

    /// Materialize every bit pattern of `[start, end)` for every complement
    ///
    /// For each distinct combination of the bits outside the range observed
    /// among current branches, ensures an entry exists for all `2^(end-start)`
    /// patterns inside it, defaulting absent entries to amplitude zero. The
    /// inversion-about-mean step requires the full sub-register basis;
    /// omitting a zero-amplitude branch would bias the mean.
    pub(crate) fn expand(&mut self, range: BitRange) {
        let patterns = range_patterns(range.width());

        let mut table: AHashMap<BitString, f64> =
            AHashMap::with_capacity(self.branches.len() * patterns.len());
        for (bits, _) in &self.branches {
            for pattern in &patterns {
                let mut next = bits.clone();
                next.overwrite(range, pattern);
                table.entry(next).or_insert(0.0);
            }
        }
        for (bits, amp) in self.branches.drain(..) {
            table.insert(bits, amp);
        }

        let mut expanded: Vec<(BitString, f64)> = table.into_iter().collect();
        expanded.sort_by(|a, b| a.0.cmp(&b.0));
        self.branches = expanded;
    }

    /// Rescale all amplitudes to unit norm
    ///
    /// # Errors
    /// Returns [`StateError::DegenerateState`] if the norm is zero; no valid
    /// renormalization exists and the simulated experiment has reached an
    /// unreachable state.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm < ZERO_TOLERANCE {
            return Err(StateError::DegenerateState);
        }
        for (_, amp) in &mut self.branches {
            *amp /= norm;
        }
        Ok(())
    }

    /// Merge duplicate basis strings, prune zero amplitudes, sort canonically
    ///
    /// Duplicates merge by summing amplitudes. The resulting branch order is
    /// lexicographic by basis string, giving deterministic iteration.
    pub fn cleanup(&mut self) {
        let mut merged: AHashMap<BitString, f64> = AHashMap::with_capacity(self.branches.len());
        for (bits, amp) in self.branches.drain(..) {
            *merged.entry(bits).or_insert(0.0) += amp;
        }

        let mut cleaned: Vec<(BitString, f64)> = merged
            .into_iter()
            .filter(|(_, amp)| amp.abs() > ZERO_TOLERANCE)
            .collect();
        cleaned.sort_by(|a, b| a.0.cmp(&b.0));
        self.branches = cleaned;
    }

    /// Mutable access for in-crate amplitude passes
    #[inline]
    pub(crate) fn branches_mut(&mut self) -> &mut Vec<(BitString, f64)> {
        &mut self.branches
    }

    fn check_range(&self, start: usize, end: usize) -> Result<BitRange> {
        let range = BitRange::new(start, end);
        if !range.is_valid_for(self.num_qubits) {
            return Err(StateError::InvalidRange {
                start,
                end,
                num_qubits: self.num_qubits,
            });
        }
        Ok(range)
    }
}

/// All bit patterns of the given width in ascending order
fn range_patterns(width: usize) -> Vec<BitString> {
    (0..1u64 << width)
        .map(|v| BitString::from_value(width, v).expect("pattern fits range width"))
        .collect()
}

impl fmt::Debug for SparseRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseRegister")
            .field("num_qubits", &self.num_qubits)
            .field("num_branches", &self.branches.len())
            .field("norm", &self.norm())
            .finish()
    }
}

impl fmt::Display for SparseRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseRegister({} qubits, {} branch{}, norm {:.6})",
            self.num_qubits,
            self.branches.len(),
            if self.branches.len() == 1 { "" } else { "es" },
            self.norm()
        )
    }
}
