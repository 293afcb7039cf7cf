//! # phasesat - Random k-CNF Instances and Stochastic Local Search
//!
//! `phasesat` is a library for generating random k-CNF formulas and searching
//! for satisfying assignments with the WalkSAT stochastic local-search
//! algorithm. Its intended use is the empirical study of the satisfiability
//! phase transition: how solvability and search cost vary with the ratio of
//! clauses to symbols.
//!
//! The library deliberately does not implement a complete SAT solver: there is
//! no resolution, unit propagation, or backtracking, and unsatisfiability is
//! never certified. A failed search only means that no model was found within
//! the flip budget.
//!
//! All randomized operations take an explicit `&mut R` where `R:
//! rand::Rng`, so runs are reproducible with a seeded generator and
//! independent invocations can safely run in parallel, each owning its random
//! source.
//!
//! ## Example
//!
//! ```
//! use phasesat::{algs::walksat::walksat, generators::random_kcnf};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(42);
//! // 3-CNF over 20 symbols with 40 clauses (ratio 2.0)
//! let cnf = random_kcnf(20, 40, 3, &mut rng).unwrap();
//! let (model, flips) = walksat(&cnf, 2000, 0.5, &mut rng).unwrap();
//! assert!(flips <= 2000);
//! if let Some(model) = model {
//!     assert!(cnf.iter().all(|cl| cl.is_sat(&model)));
//! }
//! ```
//!
//! ## Features
//!
//! | Feature name | Description |
//! | --- | --- |
//! | `fxhash` | Use the faster firefox hash function from `rustc-hash` for clause deduplication. |
//! | `serde` | Serialization of the instance types. |

pub mod algs;
pub mod generators;
pub mod instances;
pub mod types;

mod utils;
