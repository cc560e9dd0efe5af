//! Spin self-consistency for the Newns-Anderson adsorbate
//!
//! The spin-up level depends on the spin-down occupation and vice versa:
//!
//! ε_↑ = ε_a + U·n_↓,   ε_↓ = ε_a + U·n_↑
//!
//! For every pair of trial occupations on a uniform mesh the energy
//!
//! E(n_↑, n_↓) = ΔE_1↑ + ΔE_1↓ − U·n_↑·n_↓ − ε_a
//!
//! is evaluated. For each n_↓ column the n_↑ that maximizes E is kept, and the
//! column with the lowest such maximum is the self-consistent point (a minimax
//! search, not a joint minimum). With U = 0 the search is skipped and both
//! channels are fully occupied.

mod engine;

pub use engine::{SelfConsistencyEngine, SelfConsistentSolution, DEFAULT_GRID_SIZE};
