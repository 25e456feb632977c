//! Rack solving command
//!
//! Finds every dictionary word a rack can spell and ranks the words by score.

use crate::core::{RadixTree, normalize, word_score};
use rayon::prelude::*;
use std::cmp::Reverse;
use tracing::debug;

/// A found word and its letter-value score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

/// Configuration for solving a rack
pub struct SolveConfig {
    pub rack: String,
    /// Keep at most this many results
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(rack: &str) -> Self {
        Self {
            rack: normalize(rack),
            limit: None,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of solving a rack
pub struct SolveResult {
    /// The rack as searched, uppercased
    pub rack: String,
    /// Words ranked by score, highest first
    pub words: Vec<ScoredWord>,
    /// Number of words found before any limit was applied
    pub total_found: usize,
}

/// Pair each word with its score and sort by score, highest first
///
/// The sort is stable: words with equal scores keep the order they were given in.
///
/// # Examples
/// ```
/// use anagram_solver::commands::rank_words;
///
/// let ranked = rank_words(vec!["ET".to_string(), "SETT".to_string(), "ES".to_string()]);
/// let words: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
/// assert_eq!(words, ["SETT", "ET", "ES"]);
/// ```
#[must_use]
pub fn rank_words(words: Vec<String>) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = words
        .into_iter()
        .map(|word| ScoredWord {
            score: word_score(&word),
            word,
        })
        .collect();
    scored.sort_by_key(|scored| Reverse(scored.score));
    scored
}

/// Find and rank all words the rack can spell
#[must_use]
pub fn solve_rack(config: &SolveConfig, tree: &RadixTree) -> SolveResult {
    let found = tree.find_words(&config.rack);
    let total_found = found.len();
    debug!(rack = %config.rack, found = total_found, "solved rack");

    let mut words = rank_words(found);
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    SolveResult {
        rack: config.rack.clone(),
        words,
        total_found,
    }
}

/// Solve several racks in parallel against the same dictionary
///
/// Results come back in the same order as `configs`.
#[must_use]
pub fn solve_racks(configs: &[SolveConfig], tree: &RadixTree) -> Vec<SolveResult> {
    configs
        .par_iter()
        .map(|config| solve_rack(config, tree))
        .collect()
}
