//! Immutable query surface over the built indices

use crate::core::{DefinitionRecord, Difficulty, LetterCounts, PhoneticRecord, WordRecord};
use crate::index::{Indices, RhymeGroups, build_valid_words};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Bucket to draw a random sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    Difficulty(Difficulty),
    Length(usize),
}

/// Summary counts for a loaded dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub phonetics: usize,
    pub rhyme_groups: usize,
    pub definitions: usize,
}

/// Read-only dictionary built once per process
///
/// Owns every index plus two derived lookups: the validity set and the
/// position of each word's first phonetic record. There is no way to mutate
/// it after construction, so a shared reference can be handed to any number
/// of concurrent readers.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    indices: Indices,
    valid_words: FxHashSet<String>,
    first_phonetic: FxHashMap<String, usize>,
}

impl DictionaryStore {
    /// Wrap built or loaded indices
    #[must_use]
    pub fn new(indices: Indices) -> Self {
        let valid_words = build_valid_words(&indices.words_by_difficulty);

        let mut first_phonetic = FxHashMap::default();
        for (position, record) in indices.phonetics.iter().enumerate() {
            first_phonetic
                .entry(record.word().to_string())
                .or_insert(position);
        }

        log::debug!(
            "dictionary store ready: {} valid words, {} phonetic keys",
            valid_words.len(),
            first_phonetic.len()
        );

        Self {
            indices,
            valid_words,
            first_phonetic,
        }
    }

    /// Build indices from parsed records and wrap them
    #[must_use]
    pub fn from_corpora(
        words: &[WordRecord],
        phonetics: Vec<PhoneticRecord>,
        definitions: Vec<DefinitionRecord>,
    ) -> Self {
        Self::new(Indices::build(words, phonetics, definitions))
    }

    /// Underlying indices, for serialization
    #[must_use]
    pub const fn indices(&self) -> &Indices {
        &self.indices
    }

    /// Check whether a word is in the word list (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    /// use wordplay::dictionary::DictionaryStore;
    ///
    /// let words: Vec<WordRecord> = ["cat", "houses"].iter().filter_map(|w| WordRecord::new(w)).collect();
    /// let store = DictionaryStore::from_corpora(&words, Vec::new(), Vec::new());
    ///
    /// assert!(store.is_valid("CAT"));
    /// assert!(!store.is_valid("dog"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid_words.contains(&word.to_lowercase())
    }

    /// Number of distinct valid words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }

    #[must_use]
    pub fn by_difficulty_level(&self, level: Difficulty) -> &[WordRecord] {
        self.indices.words_by_difficulty.bucket(level)
    }

    /// Words of exactly `length` characters, in corpus order
    #[must_use]
    pub fn by_length(&self, length: usize) -> &[String] {
        self.indices
            .words_by_length
            .get(&length)
            .map_or(&[], Vec::as_slice)
    }

    /// Words with lengths in `min..=max`, shortest first
    #[must_use]
    pub fn by_length_range(&self, min: usize, max: usize) -> Vec<String> {
        if min > max {
            return Vec::new();
        }
        self.indices
            .words_by_length
            .range(min..=max)
            .flat_map(|(_, words)| words.iter().cloned())
            .collect()
    }

    /// Uniform sample without replacement, in random order
    ///
    /// Returns `min(count, bucket size)` words.
    pub fn random_sample<R: Rng + ?Sized>(
        &self,
        source: SampleSource,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let pool: Vec<&str> = match source {
            SampleSource::Difficulty(level) => self
                .by_difficulty_level(level)
                .iter()
                .map(WordRecord::word)
                .collect(),
            SampleSource::Length(length) => {
                self.by_length(length).iter().map(String::as_str).collect()
            }
        };
        sample_words(pool, count, rng)
    }

    /// First pronunciation recorded for `word`
    #[must_use]
    pub fn phonetic_of(&self, word: &str) -> Option<&PhoneticRecord> {
        self.first_phonetic
            .get(&word.to_lowercase())
            .map(|&position| &self.indices.phonetics[position])
    }

    /// Words rhyming with `word`, excluding `word` itself
    ///
    /// Uses the word's first pronunciation only. Returns an empty list when the
    /// word has no pronunciation, fewer than two phonemes, or no rhyme group.
    #[must_use]
    pub fn rhymes_of(&self, word: &str) -> Vec<String> {
        let query = word.to_lowercase();
        let Some(key) = self.phonetic_of(&query).and_then(PhoneticRecord::rhyme_key) else {
            return Vec::new();
        };

        self.rhyme_group(&key)
            .iter()
            .filter(|candidate| **candidate != query)
            .cloned()
            .collect()
    }

    /// Words in the group for `key`, empty if the group does not exist
    #[must_use]
    pub fn rhyme_group(&self, key: &str) -> &[String] {
        self.indices
            .rhyme_groups
            .get(key)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn all_rhyme_groups(&self) -> &RhymeGroups {
        &self.indices.rhyme_groups
    }

    /// A random rhyme group holding at least `min_words` words
    pub fn random_rhyme_group<R: Rng + ?Sized>(
        &self,
        min_words: usize,
        rng: &mut R,
    ) -> Option<(&str, &[String])> {
        let eligible: Vec<(&String, &Vec<String>)> = self
            .indices
            .rhyme_groups
            .iter()
            .filter(|(_, words)| words.len() >= min_words)
            .collect();

        eligible
            .choose(rng)
            .map(|&(key, words)| (key.as_str(), words.as_slice()))
    }

    /// The folded definition record for `word`
    #[must_use]
    pub fn definition_of(&self, word: &str) -> Option<&DefinitionRecord> {
        self.indices.definitions.get(&word.to_lowercase())
    }

    /// Every definition paragraph recorded for `word`, across all raw entries
    #[must_use]
    pub fn all_definitions_of(&self, word: &str) -> &[String] {
        self.definition_of(word)
            .map_or(&[], |record| record.definitions.as_slice())
    }

    /// Valid words that can be spelled from `letters`
    ///
    /// A word qualifies when it has at least `min_length` characters, no more
    /// characters than `letters`, and uses each letter no more often than it
    /// appears in `letters`. Case-insensitive; result order is unspecified.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    /// use wordplay::dictionary::DictionaryStore;
    ///
    /// let words: Vec<WordRecord> = ["tin", "silent", "till", "is"]
    ///     .iter()
    ///     .filter_map(|w| WordRecord::new(w))
    ///     .collect();
    /// let store = DictionaryStore::from_corpora(&words, Vec::new(), Vec::new());
    ///
    /// let mut found = store.words_formable_from("LISTEN", 3);
    /// found.sort();
    /// assert_eq!(found, ["silent", "tin"]);
    /// ```
    #[must_use]
    pub fn words_formable_from(&self, letters: &str, min_length: usize) -> Vec<String> {
        let letters = letters.to_lowercase();
        let max_length = letters.chars().count();
        let rack = LetterCounts::of(&letters);

        self.valid_words
            .par_iter()
            .filter(|word| {
                let length = word.chars().count();
                length >= min_length
                    && length <= max_length
                    && rack.covers(&LetterCounts::of(word))
            })
            .cloned()
            .collect()
    }

    /// Random words of a difficulty no longer than `max_length`, for grid puzzles
    pub fn words_for_word_search<R: Rng + ?Sized>(
        &self,
        level: Difficulty,
        count: usize,
        max_length: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let pool: Vec<&str> = self
            .by_difficulty_level(level)
            .iter()
            .filter(|record| record.length() <= max_length)
            .map(WordRecord::word)
            .collect();
        sample_words(pool, count, rng)
    }

    #[must_use]
    pub fn stats(&self) -> DictionaryStats {
        let buckets = &self.indices.words_by_difficulty;
        DictionaryStats {
            total_words: self.valid_words.len(),
            easy: buckets.easy.len(),
            medium: buckets.medium.len(),
            hard: buckets.hard.len(),
            phonetics: self.indices.phonetics.len(),
            rhyme_groups: self.indices.rhyme_groups.len(),
            definitions: self.indices.definitions.len(),
        }
    }
}

/// Shuffle the first `count` entries into place and take them
fn sample_words<R: Rng + ?Sized>(mut pool: Vec<&str>, count: usize, rng: &mut R) -> Vec<String> {
    let (chosen, _) = pool.partial_shuffle(rng, count);
    chosen.iter().map(|word| (*word).to_string()).collect()
}
