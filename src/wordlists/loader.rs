//! Dictionary loading utilities
//!
//! Builds a [`RadixTree`] from a newline-delimited word list on disk or in memory.

use crate::core::RadixTree;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a dictionary file into a radix tree
///
/// One word per line. Surrounding whitespace (including `\r`) is trimmed and blank
/// lines are skipped. Case does not matter.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_solver::wordlists::loader::load_from_file;
///
/// let tree = load_from_file("scrabble_dictionary.txt").unwrap();
/// println!("Loaded {} words", tree.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<RadixTree> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tree = tree_from_lines(&content);

    debug!(
        path = %path.display(),
        words = tree.len(),
        nodes = tree.node_count(),
        "loaded dictionary"
    );
    Ok(tree)
}

/// Build a tree from newline-delimited text
#[must_use]
pub fn tree_from_lines(content: &str) -> RadixTree {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Build a tree from an in-memory word list
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::tree_from_slice;
///
/// let tree = tree_from_slice(&["CAT", "CAR", "CART"]);
/// assert_eq!(tree.len(), 3);
/// assert!(tree.search("CART"));
/// ```
#[must_use]
pub fn tree_from_slice(slice: &[&str]) -> RadixTree {
    slice.iter().collect()
}
