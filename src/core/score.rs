//! Letter-value scoring
//!
//! Standard word-tile values. Scoring is case-insensitive and anything outside
//! `A-Z` is worth nothing.

/// Tile value of each letter, indexed from `A`
pub const LETTER_VALUES: [u32; 26] = [
    1,  // A
    3,  // B
    3,  // C
    2,  // D
    1,  // E
    4,  // F
    2,  // G
    4,  // H
    1,  // I
    8,  // J
    5,  // K
    1,  // L
    3,  // M
    1,  // N
    1,  // O
    3,  // P
    10, // Q
    1,  // R
    1,  // S
    1,  // T
    1,  // U
    4,  // V
    4,  // W
    8,  // X
    4,  // Y
    10, // Z
];

/// Value of a single character
///
/// Returns 0 for anything that is not an ASCII letter.
#[inline]
#[must_use]
pub const fn letter_value(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_VALUES[(upper as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Sum of the letter values in a word
///
/// # Examples
/// ```
/// use anagram_solver::core::word_score;
///
/// assert_eq!(word_score("HELLO"), 8);
/// assert_eq!(word_score("hElLo"), 8);
/// assert_eq!(word_score("WORD!"), 8);
/// assert_eq!(word_score(""), 0);
/// ```
#[must_use]
pub fn word_score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_scores() {
        assert_eq!(word_score("HELLO"), 8);
        assert_eq!(word_score("WORLD"), 9);
        assert_eq!(word_score(""), 0);
    }

    #[test]
    fn mixed_case_and_invalid_chars() {
        assert_eq!(word_score("hElLo"), 8);
        assert_eq!(word_score("WORD!"), 8); // W=4, O=1, R=1, D=2
        assert_eq!(word_score("123ABC"), 7); // A=1, B=3, C=3
        assert_eq!(word_score("  \t\n"), 0);
        assert_eq!(word_score("ÉCOLE"), 6); // É is not in the table
    }

    #[test]
    fn value_groups() {
        for letter in "AEIOULNSRT".chars() {
            assert_eq!(letter_value(letter), 1, "{letter}");
        }
        for letter in "DG".chars() {
            assert_eq!(letter_value(letter), 2, "{letter}");
        }
        for letter in "BCMP".chars() {
            assert_eq!(letter_value(letter), 3, "{letter}");
        }
        for letter in "FHVWY".chars() {
            assert_eq!(letter_value(letter), 4, "{letter}");
        }
        assert_eq!(letter_value('K'), 5);
        assert_eq!(letter_value('J'), 8);
        assert_eq!(letter_value('X'), 8);
        assert_eq!(letter_value('Q'), 10);
        assert_eq!(letter_value('Z'), 10);
    }

    #[test]
    fn table_total() {
        // Sum over the alphabet, one tile of each letter
        assert_eq!(LETTER_VALUES.iter().sum::<u32>(), 87);
    }

    #[test]
    fn anagrams_from_rack_scores() {
        let expected = [
            ("ES", 2),
            ("ET", 2),
            ("SET", 3),
            ("SETT", 4),
            ("STET", 4),
            ("TEST", 4),
            ("TET", 3),
            ("TETS", 4),
        ];
        for (word, score) in expected {
            assert_eq!(word_score(word), score, "{word}");
        }
    }
}
