//! Grover amplitude-amplification step over the sparse register
//!
//! One iteration is the sparse-representation analogue of the standard
//! Grover operator: an oracle phase flip over the marked branches followed by
//! inversion about the mean amplitude. The inversion only works if every
//! pattern of the search sub-register participates in the mean, so the
//! register is materialized over the input range (zero amplitudes included)
//! before averaging, then compacted again afterwards.

use crate::error::{Result, StateError};
use crate::sparse_register::SparseRegister;
use sparq_core::{BitRange, Oracle, OracleError};

/// Run one Grover amplitude-amplification iteration
///
/// Steps:
/// 1. Sign-flip the amplitude of every branch the oracle marks.
/// 2. Materialize all patterns of `input_bound` (absent branches at zero).
/// 3. Replace every amplitude `amp` with `2*mean - amp`.
/// 4. Merge duplicates, prune zeros, restore canonical order.
///
/// The flip and inversion both preserve the norm, so the register stays
/// normalized without an explicit rescale.
///
/// The oracle sees each branch's full basis string together with
/// `input_bound` and `aux_bounds`. It is evaluated over all branches before
/// any amplitude changes; an oracle error leaves the register untouched.
///
/// # Errors
/// - [`StateError::InvalidRange`] if `input_bound` exceeds the register
/// - [`StateError::Oracle`] if the oracle rejects a branch
///
/// [`StateError::InvalidRange`]: crate::StateError::InvalidRange
/// [`StateError::Oracle`]: crate::StateError::Oracle
///
/// # Example
/// ```
/// use sparq_core::{BitRange, FixedValueGreaterThan};
/// use sparq_state::{grover_iteration, SparseRegister};
///
/// let mut reg = SparseRegister::new(2).unwrap();
/// reg.hadamard(0, 2).unwrap();
///
/// // Mark the single branch above 2, i.e. |11⟩
/// let oracle = FixedValueGreaterThan::new(2);
/// grover_iteration(&mut reg, &oracle, BitRange::new(0, 2), &[]).unwrap();
///
/// let table = reg.probabilities(0, 2).unwrap();
/// assert!(table.last().unwrap().1 > 0.25);
/// ```
pub fn grover_iteration<O: Oracle + ?Sized>(
    register: &mut SparseRegister,
    oracle: &O,
    input_bound: BitRange,
    aux_bounds: &[BitRange],
) -> Result<()> {
    if !input_bound.is_valid_for(register.num_qubits()) {
        return Err(StateError::InvalidRange {
            start: input_bound.start,
            end: input_bound.end,
            num_qubits: register.num_qubits(),
        });
    }

    let marks = register
        .branches()
        .iter()
        .map(|(bits, _)| oracle.evaluate(bits, input_bound, aux_bounds))
        .collect::<std::result::Result<Vec<bool>, OracleError>>()?;

    for ((_, amp), marked) in register.branches_mut().iter_mut().zip(marks) {
        if marked {
            *amp = -*amp;
        }
    }

    register.expand(input_bound);

    let count = register.num_branches() as f64;
    let mean = register.branches().iter().map(|(_, amp)| amp).sum::<f64>() / count;
    for (_, amp) in register.branches_mut().iter_mut() {
        *amp = 2.0 * mean - *amp;
    }

    register.cleanup();
    Ok(())
}
