//! # WalkSAT Local Search
//!
//! WalkSAT searches for a satisfying assignment by starting from a random
//! assignment and repeatedly flipping one variable of an unsatisfied clause,
//! mixing noisy (random) and greedy (score-maximizing) moves. The search is
//! incomplete: running out of the flip budget says nothing about
//! unsatisfiability.

use rand::Rng;
use thiserror::Error;

use crate::{
    instances::Cnf,
    types::{Assignment, TernaryVal, Var},
};

/// Errors occurring when starting a WalkSAT search
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum WalkSatError {
    /// The noise probability is outside of `[0, 1]`
    #[error("noise probability {0} is not in [0, 1]")]
    NoiseOutOfRange(f64),
    /// The flip budget is zero
    #[error("the flip budget must be positive")]
    ZeroFlipBudget,
}

/// Searches for a satisfying assignment of `cnf` with WalkSAT, using at most
/// `max_flips` variable flips and noise probability `noise`.
///
/// Every variable occurring in the formula is initialized to an
/// independently uniform random truth value (in increasing variable order,
/// so the draw sequence is reproducible for a seeded `rng`). Each move
/// selects the first unsatisfied clause in formula order; clause selection
/// is always positional, only the move within the clause is randomized.
/// With probability `noise` a uniformly random variable of that clause is
/// flipped; otherwise each of the clause's variables is scored by the number
/// of clauses in the whole formula that flipping it would satisfy, and the
/// first variable attaining the maximum score is flipped (a later equal
/// score does not replace the current best).
///
/// Returns the satisfying assignment and the number of flips spent, or
/// `None` and the exhausted budget if no model was found within `max_flips`
/// flips. Exhaustion is an expected outcome of an incomplete heuristic, not
/// an error.
///
/// Greedy moves cost `O(k * m)` clause scans, so the worst case is
/// `O(max_flips * k * m)`. An implementation with incremental satisfaction
/// bookkeeping must reproduce the from-scratch scores exactly, including the
/// tie-break, to keep runs reproducible for a fixed random source.
///
/// # Errors
///
/// - [`WalkSatError::NoiseOutOfRange`] if `noise` is not in `[0, 1]`
/// - [`WalkSatError::ZeroFlipBudget`] if `max_flips` is zero
///
/// Both are checked before any search or random draw.
///
/// # Panics
///
/// If `cnf` contains the empty clause, which no flip can ever satisfy.
///
/// # References
///
/// - Bart Selman, Henry A. Kautz and Bram Cohen: _Noise Strategies for
///     Improving Local Search_, AAAI 1994.
pub fn walksat<R: Rng + ?Sized>(
    cnf: &Cnf,
    max_flips: usize,
    noise: f64,
    rng: &mut R,
) -> Result<(Option<Assignment>, usize), WalkSatError> {
    if !(0.0..=1.0).contains(&noise) {
        return Err(WalkSatError::NoiseOutOfRange(noise));
    }
    if max_flips == 0 {
        return Err(WalkSatError::ZeroFlipBudget);
    }

    let mut model = initial_assignment(cnf, rng);

    let mut flips = 0;
    while flips < max_flips {
        let Some(unsat) = cnf.iter().find(|cl| !cl.is_sat(&model)) else {
            return Ok((Some(model), flips));
        };

        // the clause's symbols, polarity stripped, in clause order
        let mut cands: Vec<Var> = Vec::with_capacity(unsat.len());
        for var in unsat.vars() {
            if !cands.contains(&var) {
                cands.push(var);
            }
        }

        let chosen = if rng.random_bool(noise) {
            cands[rng.random_range(0..cands.len())]
        } else {
            let mut best = cands[0];
            let mut best_score = flip_score(cnf, &mut model, best);
            for &cand in &cands[1..] {
                let score = flip_score(cnf, &mut model, cand);
                if score > best_score {
                    best_score = score;
                    best = cand;
                }
            }
            best
        };

        model.flip(chosen);
        flips += 1;
    }
    Ok((None, flips))
}

/// Assigns every variable occurring in the formula an independently uniform
/// random truth value, in increasing variable order
fn initial_assignment<R: Rng + ?Sized>(cnf: &Cnf, rng: &mut R) -> Assignment {
    let mut model = Assignment::default();
    let Some(max_var) = cnf.max_var() else {
        return model;
    };
    let mut occurs = vec![false; max_var.idx() + 1];
    cnf.iter()
        .for_each(|cl| cl.iter().for_each(|l| occurs[l.vidx()] = true));
    for (idx, occ) in occurs.iter().enumerate() {
        if *occ {
            model.assign_var(
                Var::new_unchecked(idx as u32),
                TernaryVal::from(rng.random::<bool>()),
            );
        }
    }
    model
}

/// Number of clauses of the whole formula satisfied after flipping `var`,
/// holding all other variables fixed. The flip is undone before returning,
/// so the scores are identical to recomputing satisfaction from scratch on a
/// copy per candidate.
fn flip_score(cnf: &Cnf, model: &mut Assignment, var: Var) -> usize {
    model.flip(var);
    let score = cnf.iter().filter(|cl| cl.is_sat(model)).count();
    model.flip(var);
    score
}
