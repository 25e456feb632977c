//! Dictionary word lists
//!
//! Loading of newline-delimited dictionaries into the radix tree.

pub mod loader;

/// Dictionary file read when no path is given
pub const DEFAULT_DICTIONARY: &str = "scrabble_dictionary.txt";

pub use loader::{load_from_file, tree_from_slice};
