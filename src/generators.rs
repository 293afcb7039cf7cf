//! # Random k-CNF Formula Generation
//!
//! Uniform random k-CNF instances for phase-transition experiments: every
//! clause is an unordered sample of `k` distinct literals over the `2n`
//! literals of `n` symbols, rejected and redrawn if tautological or already
//! present in the formula.
//!
//! The rejection loops are explicitly bounded. Requesting more distinct
//! clauses than combinatorially exist fails immediately, and a degenerate
//! acceptance probability (e.g. `k` close to `2n` with most draws
//! tautological or duplicated) fails fast with
//! [`GeneratorError::Exhausted`] instead of spinning indefinitely.

use rand::{seq::index, Rng};
use thiserror::Error;

use crate::{
    instances::Cnf,
    types::{Clause, Lit, RsHashSet},
    utils,
};

/// Maximum number of draws the generator spends on a single clause slot
/// before giving up with [`GeneratorError::Exhausted`]
pub const MAX_CLAUSE_ATTEMPTS: usize = 1 << 16;

/// Errors occurring during formula generation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// A parameter that must be positive was zero
    #[error("parameter `{0}` must be positive")]
    ZeroParameter(&'static str),
    /// The requested clause width exceeds the literal universe
    #[error("cannot draw {width} distinct literals from the {universe} literals over {n} symbols")]
    WidthExceedsUniverse {
        /// The requested clause width `k`
        width: usize,
        /// The number of symbols `n`
        n: u32,
        /// The size of the literal universe, `2n`
        universe: usize,
    },
    /// More distinct clauses were requested than exist for the given `n`
    /// and `k`
    #[error("{requested} clauses requested but only {available} distinct non-tautological clauses exist")]
    TooManyClauses {
        /// The requested number of clauses `m`
        requested: usize,
        /// The number of distinct non-tautological clauses
        available: usize,
    },
    /// The rejection-sampling loop hit its attempt ceiling
    #[error("gave up after {attempts} draws without a fresh clause ({collected} of {requested} clauses collected)")]
    Exhausted {
        /// Draws spent on the clause slot that could not be filled
        attempts: usize,
        /// Clauses collected before giving up
        collected: usize,
        /// The requested number of clauses `m`
        requested: usize,
    },
}

/// Computes the number of distinct non-tautological clauses with `k` distinct
/// literals over `n` symbols, `C(n, k) * 2^k`, saturating at [`usize::MAX`].
///
/// Choosing `k` distinct literals without a complementary pair is choosing
/// `k` distinct symbols and then a polarity for each.
///
/// # Examples
///
/// ```
/// use phasesat::generators::distinct_clause_count;
///
/// assert_eq!(distinct_clause_count(2, 1), 4);
/// assert_eq!(distinct_clause_count(3, 2), 12);
/// ```
pub fn distinct_clause_count(n: u32, k: usize) -> usize {
    let choices = utils::binomial(n as usize, k);
    if choices == 0 {
        return 0;
    }
    if k >= usize::BITS as usize {
        return usize::MAX;
    }
    choices.saturating_mul(1usize << k)
}

/// Generates a random k-CNF formula with `m` pairwise-distinct,
/// non-tautological clauses of `k` distinct literals each, over the symbols
/// `0..n`.
///
/// Clauses are drawn uniformly at random without replacement from the `2n`
/// literals; tautological draws (both polarities of a symbol) and draws
/// already present in the formula are rejected and redrawn. Accepted clauses
/// are stored in canonical (sorted) form, so formula-level deduplication is
/// structural and independent of draw order.
///
/// For a fixed seeded `rng` and identical parameters the generated formula
/// is bit-identical.
///
/// # Errors
///
/// - [`GeneratorError::ZeroParameter`] if `n`, `m`, or `k` is zero
/// - [`GeneratorError::WidthExceedsUniverse`] if `k > 2n`
/// - [`GeneratorError::TooManyClauses`] if `m` exceeds
///   [`distinct_clause_count`]`(n, k)`
/// - [`GeneratorError::Exhausted`] if some clause slot cannot be filled
///   within [`MAX_CLAUSE_ATTEMPTS`] draws
pub fn random_kcnf<R: Rng + ?Sized>(
    n: u32,
    m: usize,
    k: usize,
    rng: &mut R,
) -> Result<Cnf, GeneratorError> {
    if n == 0 {
        return Err(GeneratorError::ZeroParameter("n"));
    }
    if m == 0 {
        return Err(GeneratorError::ZeroParameter("m"));
    }
    if k == 0 {
        return Err(GeneratorError::ZeroParameter("k"));
    }
    let universe = 2 * n as usize;
    if k > universe {
        return Err(GeneratorError::WidthExceedsUniverse {
            width: k,
            n,
            universe,
        });
    }
    let available = distinct_clause_count(n, k);
    if m > available {
        return Err(GeneratorError::TooManyClauses {
            requested: m,
            available,
        });
    }

    let mut cnf = Cnf::with_capacity(m);
    let mut seen: RsHashSet<Clause> = RsHashSet::default();
    let mut attempts = 0;
    while cnf.len() < m {
        if attempts >= MAX_CLAUSE_ATTEMPTS {
            return Err(GeneratorError::Exhausted {
                attempts,
                collected: cnf.len(),
                requested: m,
            });
        }
        attempts += 1;
        let Some(clause) = draw_clause(universe, k, rng) else {
            continue;
        };
        if seen.contains(&clause) {
            continue;
        }
        attempts = 0;
        seen.insert(clause.clone());
        cnf.add_clause(clause);
    }
    Ok(cnf)
}

/// Draws a uniform `k`-subset of the literal universe as a canonical clause.
/// Returns `None` if the draw is tautological.
fn draw_clause<R: Rng + ?Sized>(universe: usize, k: usize, rng: &mut R) -> Option<Clause> {
    let mut lidxs = index::sample(rng, universe, k).into_vec();
    lidxs.sort_unstable();
    // Complementary literals are adjacent after sorting (2v and 2v + 1)
    if lidxs.windows(2).any(|w| w[0] >> 1 == w[1] >> 1) {
        return None;
    }
    Some(
        lidxs
            .into_iter()
            .map(|l| Lit::new_unchecked((l >> 1) as u32, l & 1 == 1))
            .collect(),
    )
}
