//! Rack-constrained word enumeration
//!
//! Depth-first walk of the radix tree that only follows edges the remaining rack
//! letters can pay for. Consumption is undone on the way back up, so sibling branches
//! always start from the same rack.

use super::letters::LetterCounts;
use super::radix::{Node, RadixTree};
use rustc_hash::FxHashSet;

/// Accumulates discovered words in discovery order
struct Collector {
    words: Vec<String>,
    seen: FxHashSet<String>,
}

impl Collector {
    fn record(&mut self, word: &[u8]) {
        // Each word has exactly one path, so this only guards against revisits
        let word = String::from_utf8_lossy(word).into_owned();
        if self.seen.insert(word.clone()) {
            self.words.push(word);
        }
    }
}

impl RadixTree {
    /// Find every stored word that can be spelled from the rack
    ///
    /// Each rack letter may be used at most as many times as it appears. Results are
    /// deduplicated and returned in discovery order, which follows the rack letters in
    /// ascending order at every branch.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::RadixTree;
    ///
    /// let tree: RadixTree = ["CAT", "CAR", "CART", "A", "AT"].into_iter().collect();
    /// let mut words = tree.find_words("atcr");
    /// words.sort();
    ///
    /// assert_eq!(words, ["A", "AT", "CAR", "CART", "CAT"]);
    /// ```
    #[must_use]
    pub fn find_words(&self, rack: &str) -> Vec<String> {
        let mut counts = LetterCounts::from_rack(rack);
        let mut collector = Collector {
            words: Vec::new(),
            seen: FxHashSet::default(),
        };
        if counts.is_empty() {
            return collector.words;
        }

        let letters: Vec<u8> = counts.available().collect();
        let mut word = Vec::with_capacity(counts.total() as usize);
        walk(&self.root, &letters, &mut counts, &mut word, &mut collector);
        collector.words
    }
}

fn walk(
    node: &Node,
    letters: &[u8],
    rack: &mut LetterCounts,
    word: &mut Vec<u8>,
    collector: &mut Collector,
) {
    if node.is_terminal && !word.is_empty() {
        collector.record(word);
    }

    for &letter in letters {
        if rack.count(letter) == 0 {
            continue;
        }
        let Some(child) = node.children.get(&letter) else {
            continue;
        };
        if !rack.take_all(&child.key_part) {
            continue;
        }

        word.extend_from_slice(&child.key_part);
        walk(child, letters, rack, word, collector);
        word.truncate(word.len() - child.key_part.len());
        rack.restore(&child.key_part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn find_words_basic() {
        let tree: RadixTree = ["CAT", "CAR", "CART", "A", "AT"].into_iter().collect();

        let words = sorted(tree.find_words("ATCR"));
        assert_eq!(words, ["A", "AT", "CAR", "CART", "CAT"]);
    }

    #[test]
    fn empty_rack_finds_nothing() {
        let tree: RadixTree = ["HELLO", "WORLD", "TEST"].into_iter().collect();
        assert!(tree.find_words("").is_empty());
    }

    #[test]
    fn unmatched_rack_finds_nothing() {
        let tree: RadixTree = ["HELLO", "WORLD", "TEST"].into_iter().collect();
        assert!(tree.find_words("XYZ").is_empty());
    }

    #[test]
    fn duplicate_letters_bound_edges() {
        let tree: RadixTree = ["HELLO", "WORLD", "TEST", "EEL", "LE"]
            .into_iter()
            .collect();

        assert_eq!(sorted(tree.find_words("EEL")), ["EEL", "LE"]);
        // One E is not enough for EEL
        assert_eq!(tree.find_words("EL"), ["LE"]);
    }

    #[test]
    fn edge_needing_repeated_letter() {
        let tree: RadixTree = ["TEST", "SETT", "SET", "STET", "TET", "TETS", "ES", "ET"]
            .into_iter()
            .collect();

        let words = sorted(tree.find_words("ETTS"));
        assert_eq!(
            words,
            ["ES", "ET", "SET", "SETT", "STET", "TEST", "TET", "TETS"]
        );
        assert_eq!(sorted(tree.find_words("ETS")), ["ES", "ET", "SET"]);
    }

    #[test]
    fn infeasible_edge_does_not_leak_into_siblings() {
        // The AB edge takes the A before failing on B; the CA edge still needs it
        let tree: RadixTree = ["XAB", "XCA"].into_iter().collect();
        assert_eq!(tree.find_words("XAC"), ["XCA"]);
    }

    #[test]
    fn rack_case_is_normalized() {
        let tree: RadixTree = ["CAT"].into_iter().collect();
        assert_eq!(tree.find_words("tac"), ["CAT"]);
    }

    #[test]
    fn non_letters_in_rack_are_inert() {
        let tree: RadixTree = ["CAT"].into_iter().collect();
        assert_eq!(tree.find_words("C?A1T!"), ["CAT"]);
        assert!(tree.find_words("?!1").is_empty());
    }

    #[test]
    fn multibyte_rack_chars_cannot_combine() {
        // À is 0xC3 0x80: É starts with 0xC3 and Ā ends with 0x80
        let tree: RadixTree = ["À", "CAT"].into_iter().collect();
        assert!(tree.find_words("ĀÉ").is_empty());
        assert_eq!(tree.find_words("ĀÉCAT"), ["CAT"]);
    }

    #[test]
    fn no_duplicates_in_results() {
        let tree: RadixTree = ["A", "AA", "AAA"].into_iter().collect();
        assert_eq!(tree.find_words("AAAA"), ["A", "AA", "AAA"]);
    }

    #[test]
    fn discovery_follows_rack_letter_order() {
        let tree: RadixTree = ["TA", "AT", "CAT"].into_iter().collect();
        assert_eq!(tree.find_words("TCA"), ["AT", "CAT", "TA"]);
    }

    #[test]
    fn duplicate_inserts_do_not_change_fixed_rack_results() {
        let once: RadixTree = ["CAR", "CART", "CAT"].into_iter().collect();
        let twice: RadixTree = ["CAR", "CART", "CAR", "CAT", "CART"].into_iter().collect();
        assert_eq!(once.find_words("TRAC"), twice.find_words("TRAC"));
    }

    fn dictionary() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-F]{1,6}", 1..40)
    }

    proptest! {
        #[test]
        fn inserted_words_are_found(words in dictionary()) {
            let tree: RadixTree = words.iter().collect();
            for word in &words {
                prop_assert!(tree.search(word));
            }
        }

        #[test]
        fn words_never_inserted_are_not_found(words in dictionary(), other in "[A-F]{1,7}") {
            prop_assume!(!words.contains(&other));
            let tree: RadixTree = words.iter().collect();
            prop_assert!(!tree.search(&other));
        }

        #[test]
        fn duplicate_inserts_do_not_change_results(
            words in dictionary(),
            rack in "[A-F]{0,8}",
        ) {
            let once: RadixTree = words.iter().collect();
            let twice: RadixTree = words.iter().chain(words.iter()).collect();
            prop_assert_eq!(once.len(), twice.len());
            prop_assert_eq!(once.node_count(), twice.node_count());
            prop_assert_eq!(once.find_words(&rack), twice.find_words(&rack));
        }

        #[test]
        fn words_spell_from_their_own_letters(words in dictionary()) {
            let tree: RadixTree = words.iter().collect();
            for word in &words {
                prop_assert!(tree.find_words(word).contains(word));
            }
        }

        #[test]
        fn found_words_fit_in_rack(words in dictionary(), rack in "[A-F]{0,8}") {
            let tree: RadixTree = words.iter().collect();
            let budget = LetterCounts::from_rack(&rack);
            for word in tree.find_words(&rack) {
                prop_assert!(tree.search(&word));
                prop_assert!(budget.contains_all(&LetterCounts::from_rack(&word)));
            }
        }

        #[test]
        fn larger_rack_never_loses_words(
            words in dictionary(),
            rack in "[A-F]{0,6}",
            extra in "[A-F]{0,4}",
        ) {
            let tree: RadixTree = words.iter().collect();
            let bigger = tree.find_words(&format!("{rack}{extra}"));
            for word in tree.find_words(&rack) {
                prop_assert!(bigger.contains(&word));
            }
        }

        #[test]
        fn results_are_unique(words in dictionary(), rack in "[A-F]{0,8}") {
            let tree: RadixTree = words.iter().collect();
            let found = tree.find_words(&rack);
            let unique: FxHashSet<&String> = found.iter().collect();
            prop_assert_eq!(unique.len(), found.len());
        }
    }
}
