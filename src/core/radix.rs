//! Compressed prefix tree for dictionary storage
//!
//! Edges carry multi-letter labels and each node has at most one child per first
//! letter, so both insertion and lookup pick the next branch with a single map probe.

use super::letters::normalize;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// One edge-labeled segment of the tree
#[derive(Debug, Clone, Default)]
pub(super) struct Node {
    /// Label on the edge from the parent; empty only for the root
    pub(super) key_part: Vec<u8>,
    /// A word ends at this node
    pub(super) is_terminal: bool,
    /// Children keyed by the first letter of their `key_part`
    pub(super) children: FxHashMap<u8, Node>,
}

impl Node {
    fn leaf(key_part: &[u8]) -> Self {
        Self {
            key_part: key_part.to_vec(),
            is_terminal: true,
            children: FxHashMap::default(),
        }
    }

    fn count(&self) -> usize {
        self.children.values().map(|child| 1 + child.count()).sum()
    }
}

/// Radix tree holding a word dictionary
///
/// Words are uppercased on the way in, and queries are uppercased the same way, so the
/// dictionary and racks may use any ASCII case.
///
/// # Examples
/// ```
/// use anagram_solver::core::RadixTree;
///
/// let mut tree = RadixTree::new();
/// tree.insert("cart");
///
/// assert!(tree.search("CART"));
/// assert!(!tree.search("CAR"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RadixTree {
    pub(super) root: Node,
    len: usize,
}

impl RadixTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// Inserting a word twice has no further effect. The empty string is never stored.
    pub fn insert(&mut self, word: &str) {
        let key = normalize(word);
        if key.is_empty() {
            return;
        }
        if Self::insert_at(&mut self.root, key.as_bytes()) {
            self.len += 1;
        }
    }

    /// Returns true if the word was not already present
    fn insert_at(node: &mut Node, key: &[u8]) -> bool {
        let Some(&first) = key.first() else {
            let added = !node.is_terminal;
            node.is_terminal = true;
            return added;
        };

        let child = match node.children.entry(first) {
            Entry::Vacant(slot) => {
                slot.insert(Node::leaf(key));
                return true;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        let common = common_prefix_len(&child.key_part, key);
        if common == child.key_part.len() {
            return Self::insert_at(child, &key[common..]);
        }

        // Diverged inside the edge: split it at the common prefix
        let mut old = std::mem::take(child);
        let suffix = old.key_part.split_off(common);
        child.key_part = std::mem::replace(&mut old.key_part, suffix);
        child.children.insert(old.key_part[0], old);

        if common < key.len() {
            child.children.insert(key[common], Node::leaf(&key[common..]));
        } else {
            child.is_terminal = true;
        }
        true
    }

    /// Check whether a word was inserted
    ///
    /// Only exact matches count: a prefix of an inserted word is not found.
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        let key = normalize(word);
        let mut rest = key.as_bytes();
        if rest.is_empty() {
            return false;
        }

        let mut node = &self.root;
        while let Some(first) = rest.first() {
            let Some(child) = node.children.get(first) else {
                return false;
            };
            let Some(remaining) = rest.strip_prefix(child.key_part.as_slice()) else {
                return false;
            };
            rest = remaining;
            node = child;
        }
        node.is_terminal
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes below the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl<S: AsRef<str>> Extend<S> for RadixTree {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RadixTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
