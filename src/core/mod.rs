//! Core dictionary types
//!
//! The radix tree, the rack-constrained word search over it, and letter scoring.
//! Everything here is pure in-memory logic with no I/O.

mod enumerate;
mod letters;
mod radix;
mod score;

pub use letters::{LetterCounts, normalize};
pub use radix::RadixTree;
pub use score::{LETTER_VALUES, letter_value, word_score};
