//! Anagram Solver
//!
//! Finds every dictionary word that can be spelled from a rack of letters and ranks the
//! words by tile score. The dictionary lives in a compressed prefix (radix) tree, and the
//! search only follows edges the rack can still pay for.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::core::{RadixTree, word_score};
//!
//! let tree: RadixTree = ["CAT", "CAR", "CART", "A", "AT"].into_iter().collect();
//!
//! let mut words = tree.find_words("ATCR");
//! words.sort();
//! assert_eq!(words, ["A", "AT", "CAR", "CART", "CAT"]);
//! assert_eq!(word_score("CART"), 6);
//! ```

// Core dictionary types
pub mod core;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
