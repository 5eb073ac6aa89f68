//! Read-only lookups against processed indices

use crate::core::{DefinitionRecord, Difficulty};
use crate::dictionary::{DictionaryStore, SampleSource};
use crate::persist::{PersistError, load_indices};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::Path;

/// Load the indices in `data` into a store
///
/// # Errors
/// Returns [`PersistError`] if the indices cannot be read.
pub fn open_dictionary(data: &Path) -> Result<DictionaryStore, PersistError> {
    load_indices(data).map(DictionaryStore::new)
}

/// Everything known about a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    pub valid: bool,
    pub difficulty: Option<Difficulty>,
    pub transcription: Option<String>,
    pub rhymes: usize,
    pub definitions: usize,
}

#[must_use]
pub fn check_word(store: &DictionaryStore, word: &str) -> WordReport {
    let word = word.trim().to_lowercase();
    let valid = store.is_valid(&word);

    WordReport {
        difficulty: valid.then(|| Difficulty::from_length(word.chars().count())),
        transcription: store
            .phonetic_of(&word)
            .map(|record| record.transcription().to_string()),
        rhymes: store.rhymes_of(&word).len(),
        definitions: store.all_definitions_of(&word).len(),
        valid,
        word,
    }
}

#[must_use]
pub fn define_word<'s>(store: &'s DictionaryStore, word: &str) -> Option<&'s DefinitionRecord> {
    store.definition_of(word.trim())
}

/// Rhymes for `word`, alphabetically
#[must_use]
pub fn find_rhymes(store: &DictionaryStore, word: &str) -> Vec<String> {
    let mut rhymes = store.rhymes_of(word.trim());
    rhymes.sort_unstable();
    rhymes
}

/// Words spellable from `letters`, longest first then alphabetically
#[must_use]
pub fn find_anagrams(store: &DictionaryStore, letters: &str, min_length: usize) -> Vec<String> {
    let mut words = store.words_formable_from(letters.trim(), min_length);
    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

/// Run `draw` with a seeded generator, or the thread generator when `seed` is `None`
fn with_rng<T>(seed: Option<u64>, draw: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    match seed {
        Some(seed) => draw(&mut StdRng::seed_from_u64(seed)),
        None => draw(&mut rand::rng()),
    }
}

/// Random sample, reproducible when `seed` is given
#[must_use]
pub fn sample_words(
    store: &DictionaryStore,
    source: SampleSource,
    count: usize,
    seed: Option<u64>,
) -> Vec<String> {
    with_rng(seed, |rng| store.random_sample(source, count, rng))
}

/// A random rhyme group with at least `min_words` words
#[must_use]
pub fn pick_rhyme_group(
    store: &DictionaryStore,
    min_words: usize,
    seed: Option<u64>,
) -> Option<(&str, &[String])> {
    with_rng(seed, |rng| store.random_rhyme_group(min_words, rng))
}

/// Words for a word-search grid, sorted for display
#[must_use]
pub fn word_search_words(
    store: &DictionaryStore,
    level: Difficulty,
    count: usize,
    max_length: usize,
    seed: Option<u64>,
) -> Vec<String> {
    let mut words = with_rng(seed, |rng| {
        store.words_for_word_search(level, count, max_length, rng)
    });
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PhoneticRecord, WordRecord};

    fn store() -> DictionaryStore {
        let words: Vec<WordRecord> = ["cat", "hat", "bat", "act", "tacit", "houses"]
            .iter()
            .filter_map(|w| WordRecord::new(w))
            .collect();
        let phonetics = [("cat", "K AE1 T"), ("hat", "HH AE1 T"), ("bat", "B AE1 T")]
            .iter()
            .filter_map(|(w, s)| PhoneticRecord::new(*w, s))
            .collect();
        let definitions = vec![DefinitionRecord {
            word: "cat".to_string(),
            definitions: vec!["A small feline.".to_string()],
            part_of_speech: Some("n".to_string()),
            pronunciation: None,
        }];
        DictionaryStore::from_corpora(&words, phonetics, definitions)
    }

    #[test]
    fn check_known_word() {
        let report = check_word(&store(), " CAT ");
        assert_eq!(report.word, "cat");
        assert!(report.valid);
        assert_eq!(report.difficulty, Some(Difficulty::Easy));
        assert_eq!(report.transcription.as_deref(), Some("K AE1 T"));
        assert_eq!(report.rhymes, 2);
        assert_eq!(report.definitions, 1);
    }

    #[test]
    fn check_unknown_word() {
        let report = check_word(&store(), "zebra");
        assert!(!report.valid);
        assert_eq!(report.difficulty, None);
        assert_eq!(report.transcription, None);
        assert_eq!(report.rhymes, 0);
    }

    #[test]
    fn rhymes_sorted() {
        assert_eq!(find_rhymes(&store(), "hat"), ["bat", "cat"]);
    }

    #[test]
    fn anagrams_longest_first() {
        assert_eq!(find_anagrams(&store(), "tacit", 3), ["tacit", "act", "cat"]);
    }

    #[test]
    fn seeded_samples_repeat() {
        let store = store();
        let source = SampleSource::Difficulty(Difficulty::Easy);
        assert_eq!(
            sample_words(&store, source, 3, Some(11)),
            sample_words(&store, source, 3, Some(11))
        );
        assert_eq!(sample_words(&store, source, 100, None).len(), 4);
    }

    #[test]
    fn rhyme_group_needs_enough_words() {
        let store = store();
        let (key, words) = pick_rhyme_group(&store, 3, Some(2)).unwrap();
        assert_eq!(key, "AE1 T");
        assert_eq!(words, ["cat", "hat", "bat"]);
        assert!(pick_rhyme_group(&store, 4, None).is_none());
    }

    #[test]
    fn word_search_respects_max_length() {
        let words = word_search_words(&store(), Difficulty::Medium, 5, 5, Some(3));
        assert_eq!(words, ["tacit"]);
    }

    #[test]
    fn define_uses_folded_record() {
        let store = store();
        let record = define_word(&store, "Cat").unwrap();
        assert_eq!(record.part_of_speech.as_deref(), Some("n"));
        assert!(define_word(&store, "dog").is_none());
    }
}
