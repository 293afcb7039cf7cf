//! # Stochastic Local-Search Algorithms
//!
//! This module contains implementations of incomplete, randomized algorithms
//! for the satisfiability problem. The implementations here are intended to
//! be simple and clearly specified rather than optimized for maximum
//! performance.

pub mod walksat;
