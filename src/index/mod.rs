//! Derived indices over parsed corpora
//!
//! [`Indices`] bundles the five serializable structures the dictionary store
//! serves queries from. They can be built from parsed records or loaded from
//! previously persisted documents.

mod builder;

use crate::core::{DefinitionRecord, Difficulty, PhoneticRecord, WordRecord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use builder::{
    MIN_RHYME_GROUP, build_by_difficulty, build_by_length, build_rhyme_groups, build_valid_words,
};

/// Words keyed by exact length, ascending
pub type WordsByLength = BTreeMap<usize, Vec<String>>;

/// Words keyed by rhyme key (last two phonemes)
pub type RhymeGroups = BTreeMap<String, Vec<String>>;

/// Word records split into difficulty buckets
///
/// Deserialized buckets are re-sorted by each record's own difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBuckets")]
pub struct WordsByDifficulty {
    pub easy: Vec<WordRecord>,
    pub medium: Vec<WordRecord>,
    pub hard: Vec<WordRecord>,
}

#[derive(Deserialize)]
struct StoredBuckets {
    #[serde(default)]
    easy: Vec<WordRecord>,
    #[serde(default)]
    medium: Vec<WordRecord>,
    #[serde(default)]
    hard: Vec<WordRecord>,
}

impl From<StoredBuckets> for WordsByDifficulty {
    fn from(stored: StoredBuckets) -> Self {
        let records: Vec<WordRecord> = stored
            .easy
            .into_iter()
            .chain(stored.medium)
            .chain(stored.hard)
            .collect();
        build_by_difficulty(&records)
    }
}

impl WordsByDifficulty {
    #[must_use]
    pub fn bucket(&self, level: Difficulty) -> &[WordRecord] {
        match level {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub(crate) fn bucket_mut(&mut self, level: Difficulty) -> &mut Vec<WordRecord> {
        match level {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// All records, easy bucket first
    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> {
        self.easy.iter().chain(&self.medium).chain(&self.hard)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Definition records folded to one per headword
///
/// Serializes as a plain list of records. Deserializing folds any repeated
/// headwords, so documents with duplicate entries load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DefinitionRecord>", into = "Vec<DefinitionRecord>")]
pub struct DefinitionIndex {
    records: Vec<DefinitionRecord>,
    lookup: FxHashMap<String, usize>,
}

impl DefinitionIndex {
    /// Fold raw entries in parse order
    ///
    /// The first entry for a word keeps its metadata; later entries append
    /// their definitions.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::DefinitionRecord;
    /// use wordplay::index::DefinitionIndex;
    ///
    /// let entry = |text: &str| DefinitionRecord {
    ///     word: "bow".to_string(),
    ///     definitions: vec![text.to_string()],
    ///     part_of_speech: None,
    ///     pronunciation: None,
    /// };
    /// let index = DefinitionIndex::fold(vec![entry("To bend."), entry("A weapon.")]);
    ///
    /// assert_eq!(index.len(), 1);
    /// assert_eq!(index.get("bow").unwrap().definitions, ["To bend.", "A weapon."]);
    /// ```
    #[must_use]
    pub fn fold(entries: Vec<DefinitionRecord>) -> Self {
        let mut records: Vec<DefinitionRecord> = Vec::with_capacity(entries.len());
        let mut lookup: FxHashMap<String, usize> = FxHashMap::default();

        for entry in entries {
            if let Some(&position) = lookup.get(&entry.word) {
                records[position].absorb(entry);
            } else {
                lookup.insert(entry.word.clone(), records.len());
                records.push(entry);
            }
        }

        Self { records, lookup }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&DefinitionRecord> {
        self.lookup.get(word).map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn records(&self) -> &[DefinitionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<DefinitionRecord>> for DefinitionIndex {
    fn from(entries: Vec<DefinitionRecord>) -> Self {
        Self::fold(entries)
    }
}

impl From<DefinitionIndex> for Vec<DefinitionRecord> {
    fn from(index: DefinitionIndex) -> Self {
        index.records
    }
}

/// Every index the dictionary store is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indices {
    pub words_by_difficulty: WordsByDifficulty,
    pub words_by_length: WordsByLength,
    pub phonetics: Vec<PhoneticRecord>,
    pub rhyme_groups: RhymeGroups,
    pub definitions: DefinitionIndex,
}

impl Indices {
    /// Build all indices from parsed records
    #[must_use]
    pub fn build(
        words: &[WordRecord],
        phonetics: Vec<PhoneticRecord>,
        definitions: Vec<DefinitionRecord>,
    ) -> Self {
        let rhyme_groups = build_rhyme_groups(&phonetics);

        log::info!(
            "built indices: {} words, {} phonetic records, {} rhyme groups",
            words.len(),
            phonetics.len(),
            rhyme_groups.len()
        );

        Self {
            words_by_difficulty: build_by_difficulty(words),
            words_by_length: build_by_length(words),
            phonetics,
            rhyme_groups,
            definitions: DefinitionIndex::fold(definitions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, definition: &str, pos: Option<&str>) -> DefinitionRecord {
        DefinitionRecord {
            word: word.to_string(),
            definitions: vec![definition.to_string()],
            part_of_speech: pos.map(String::from),
            pronunciation: None,
        }
    }

    #[test]
    fn fold_first_entry_wins() {
        let index = DefinitionIndex::fold(vec![
            entry("bow", "To bend.", Some("v")),
            entry("arrow", "A missile.", Some("n")),
            entry("bow", "A weapon.", Some("n")),
        ]);

        assert_eq!(index.len(), 2);
        let bow = index.get("bow").unwrap();
        assert_eq!(bow.part_of_speech.as_deref(), Some("v"));
        assert_eq!(bow.definitions, ["To bend.", "A weapon."]);

        // Order of first appearance is kept
        assert_eq!(index.records()[1].word, "arrow");
    }

    #[test]
    fn definitions_json_folds_duplicates() {
        let json = r#"[
            {"word":"bow","definitions":["To bend."]},
            {"word":"bow","definitions":["A weapon."],"partOfSpeech":"n"}
        ]"#;
        let index: DefinitionIndex = serde_json::from_str(json).unwrap();
        let bow = index.get("bow").unwrap();
        assert_eq!(bow.definitions.len(), 2);
        assert_eq!(bow.part_of_speech.as_deref(), Some("n"));
    }

    #[test]
    fn words_by_length_json_keys_are_numbers() {
        let mut by_length = WordsByLength::new();
        by_length.insert(5, vec!["crane".to_string()]);

        let json = serde_json::to_string(&by_length).unwrap();
        assert_eq!(json, r#"{"5":["crane"]}"#);

        let back: WordsByLength = serde_json::from_str(&json).unwrap();
        assert_eq!(back, by_length);
    }

    #[test]
    fn build_bundles_everything() {
        let words: Vec<WordRecord> = ["cat", "houses", "a"]
            .iter()
            .filter_map(|w| WordRecord::new(w))
            .collect();
        let phonetics = vec![
            PhoneticRecord::new("cat", "K AE T").unwrap(),
            PhoneticRecord::new("hat", "HH AE T").unwrap(),
            PhoneticRecord::new("bat", "B AE T").unwrap(),
        ];
        let indices = Indices::build(&words, phonetics, vec![entry("cat", "A feline.", None)]);

        assert_eq!(indices.words_by_difficulty.easy.len(), 2);
        assert_eq!(indices.words_by_difficulty.medium.len(), 1);
        assert_eq!(indices.words_by_length[&3], ["cat"]);
        assert_eq!(indices.rhyme_groups.len(), 1);
        assert_eq!(indices.definitions.len(), 1);
    }

    #[test]
    fn loaded_buckets_follow_recomputed_difficulty() {
        let json = r#"{
            "easy": [{"word":"cat","length":4,"difficulty":"easy"}],
            "medium": [],
            "hard": [{"word":"crane","length":6,"difficulty":"hard"}]
        }"#;
        let buckets: WordsByDifficulty = serde_json::from_str(json).unwrap();

        assert!(buckets.hard.is_empty());
        assert_eq!(buckets.medium, [WordRecord::new("crane").unwrap()]);
        assert_eq!(buckets.easy[0].length(), 3);
    }
}
