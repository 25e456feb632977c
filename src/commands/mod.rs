//! Command implementations

pub mod solve;

pub use solve::{ScoredWord, SolveConfig, SolveResult, rank_words, solve_rack, solve_racks};
