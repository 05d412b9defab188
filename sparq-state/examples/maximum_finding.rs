//! Grover-based maximum finding over the sparse register
//!
//! Searches for the largest value a sub-register can hold: keep a running
//! threshold in an auxiliary register, amplify the search values that exceed
//! it, measure a candidate, and raise the threshold whenever the candidate
//! improves on it. Rounds that fail to improve fall back to a plain uniform
//! draw so the experiment cannot stall on a bad threshold.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sparq_core::{BitRange, RangeGreaterThan};
use sparq_state::{Result, SparseRegister};

const SEARCH_BITS: usize = 3;

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let search = BitRange::new(0, SEARCH_BITS);
    let threshold = BitRange::new(SEARCH_BITS, 2 * SEARCH_BITS);

    // Initial candidate: one uniform draw
    let mut best = uniform_draw(&mut rng)?;
    println!("initial candidate: {}", best);

    for round in 1..=8 {
        let mut reg = SparseRegister::new(2 * SEARCH_BITS)?;
        reg.set_value(threshold.start, threshold.end, best, &mut rng)?;
        reg.hadamard(search.start, search.end)?;

        sparq_state::grover_iteration(&mut reg, &RangeGreaterThan, search, &[threshold])?;

        println!("round {}: {}", round, reg);
        for (bits, prob) in reg.probabilities(search.start, search.end)? {
            println!("  {} ({}) -> {:.4}", bits, bits.to_value(), prob);
        }

        let candidate = reg.measure(search.start, search.end, &mut rng)?.to_value();
        if candidate > best {
            println!("round {}: improved {} -> {}", round, best, candidate);
            best = candidate;
        } else {
            // Re-randomize so a threshold that marks most of the range
            // (where one amplification round suppresses the marked values)
            // cannot pin the search.
            let redraw = uniform_draw(&mut rng)?;
            if redraw > best {
                println!("round {}: redraw improved {} -> {}", round, best, redraw);
                best = redraw;
            }
        }

        if best == (1 << SEARCH_BITS) - 1 {
            break;
        }
    }

    println!("maximum found: {}", best);
    Ok(())
}

fn uniform_draw(rng: &mut StdRng) -> Result<u64> {
    let mut reg = SparseRegister::new(SEARCH_BITS)?;
    reg.hadamard(0, SEARCH_BITS)?;
    Ok(reg.measure(0, SEARCH_BITS, rng)?.to_value())
}
