//! Letter normalization and rack multisets
//!
//! Words and racks are handled as ASCII-uppercased bytes. Racks only count ASCII
//! characters: a multi-byte character is dropped whole, so its bytes can never be
//! combined with another character's bytes to pay for an edge.

/// Normalize a word or rack to the uppercase form stored in the tree
///
/// # Examples
/// ```
/// use anagram_solver::core::normalize;
///
/// assert_eq!(normalize("CaRt"), "CART");
/// assert_eq!(normalize("word!"), "WORD!");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_ascii_uppercase()
}

/// Letter histogram for a rack
///
/// Counts are indexed by ASCII byte value. ASCII characters outside the alphabet are
/// tracked but never consumed by a dictionary edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u32; 256],
    total: u32,
}

impl LetterCounts {
    /// Create an empty multiset
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Build the frequency table for a rack
    ///
    /// Non-ASCII characters are ignored.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::LetterCounts;
    ///
    /// let rack = LetterCounts::from_rack("eel");
    /// assert_eq!(rack.count(b'E'), 2);
    /// assert_eq!(rack.count(b'L'), 1);
    /// assert_eq!(rack.total(), 3);
    /// ```
    #[must_use]
    pub fn from_rack(rack: &str) -> Self {
        normalize(rack).bytes().filter(u8::is_ascii).collect()
    }

    /// Remaining copies of a letter
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u32 {
        self.counts[letter as usize]
    }

    /// Total number of letters remaining
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Add one copy of a letter
    #[inline]
    pub fn add(&mut self, letter: u8) {
        self.counts[letter as usize] += 1;
        self.total += 1;
    }

    /// Take one copy of a letter, returning false if none remain
    #[inline]
    pub fn take(&mut self, letter: u8) -> bool {
        let slot = &mut self.counts[letter as usize];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        self.total -= 1;
        true
    }

    /// Take every letter of `letters`, or nothing at all
    ///
    /// On failure the letters taken so far are put back, leaving the multiset unchanged.
    pub fn take_all(&mut self, letters: &[u8]) -> bool {
        for (taken, &letter) in letters.iter().enumerate() {
            if !self.take(letter) {
                self.restore(&letters[..taken]);
                return false;
            }
        }
        true
    }

    /// Put back letters previously taken with [`take_all`](Self::take_all)
    pub fn restore(&mut self, letters: &[u8]) {
        for &letter in letters {
            self.add(letter);
        }
    }

    /// Distinct letters with a nonzero count, in ascending byte order
    pub fn available(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&letter| self.count(letter) > 0)
    }

    /// True if this multiset holds at least as many of every letter as `other`
    #[cfg(test)]
    pub(crate) fn contains_all(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut counts = Self::empty();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}
