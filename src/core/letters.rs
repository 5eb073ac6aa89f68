//! Letter multisets
//!
//! Used both for anagram search (is one word's multiset contained in a rack
//! of letters) and for duplicate-letter handling when scoring guesses.

use rustc_hash::FxHashMap;

/// Count of each character in a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<char, usize>);

impl LetterCounts {
    /// Count the characters of `text` as given (no case folding)
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false`, leaving the counts untouched, when none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// True if every letter of `word` is available in at least the needed quantity
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::LetterCounts;
    ///
    /// let rack = LetterCounts::of("listen");
    /// assert!(rack.covers(&LetterCounts::of("silent")));
    /// assert!(rack.covers(&LetterCounts::of("tin")));
    /// assert!(!rack.covers(&LetterCounts::of("till")));
    /// ```
    #[must_use]
    pub fn covers(&self, word: &Self) -> bool {
        word.0.iter().all(|(&letter, &needed)| self.get(letter) >= needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::of("speed");
        assert_eq!(counts.get('s'), 1);
        assert_eq!(counts.get('e'), 2);
        assert_eq!(counts.get('z'), 0);
    }

    #[test]
    fn take_decrements_until_exhausted() {
        let mut counts = LetterCounts::of("ee");
        assert!(counts.take('e'));
        assert!(counts.take('e'));
        assert!(!counts.take('e'));
        assert!(!counts.take('x'));
        assert_eq!(counts.get('e'), 0);
    }

    #[test]
    fn covers_respects_multiplicity() {
        let rack = LetterCounts::of("aab");
        assert!(rack.covers(&LetterCounts::of("aba")));
        assert!(!rack.covers(&LetterCounts::of("aaa")));
        assert!(rack.covers(&LetterCounts::of("")));
    }
}
