//! Index construction
//!
//! Every builder is a pure function of a single record sequence, so the
//! indices can be built in any order.

use super::{RhymeGroups, WordsByDifficulty, WordsByLength};
use crate::core::{PhoneticRecord, WordRecord};
use rustc_hash::{FxHashMap, FxHashSet};

/// Rhyme groups with fewer distinct words than this are dropped
pub const MIN_RHYME_GROUP: usize = 3;

/// Group records by difficulty, keeping input order within each bucket
#[must_use]
pub fn build_by_difficulty(records: &[WordRecord]) -> WordsByDifficulty {
    let mut buckets = WordsByDifficulty::default();
    for record in records {
        buckets.bucket_mut(record.difficulty()).push(record.clone());
    }
    buckets
}

/// Group words by their exact length
///
/// # Examples
/// ```
/// use wordplay::core::WordRecord;
/// use wordplay::index::build_by_length;
///
/// let records: Vec<WordRecord> = ["crane", "cat", "slate"]
///     .iter()
///     .filter_map(|w| WordRecord::new(w))
///     .collect();
/// let by_length = build_by_length(&records);
///
/// assert_eq!(by_length[&5], ["crane", "slate"]);
/// assert_eq!(by_length[&3], ["cat"]);
/// assert!(!by_length.contains_key(&6));
/// ```
#[must_use]
pub fn build_by_length(records: &[WordRecord]) -> WordsByLength {
    let mut by_length = WordsByLength::new();
    for record in records {
        by_length
            .entry(record.length())
            .or_default()
            .push(record.word().to_string());
    }
    by_length
}

/// Group words by the last two phonemes of each pronunciation
///
/// Groups are deduplicated in first-seen order, then any group with fewer
/// than [`MIN_RHYME_GROUP`] distinct words is discarded.
#[must_use]
pub fn build_rhyme_groups(phonetics: &[PhoneticRecord]) -> RhymeGroups {
    let mut raw: FxHashMap<String, Vec<&str>> = FxHashMap::default();
    for record in phonetics {
        if let Some(key) = record.rhyme_key() {
            raw.entry(key).or_default().push(record.word());
        }
    }

    raw.into_iter()
        .filter_map(|(key, words)| {
            let mut seen = FxHashSet::default();
            let distinct: Vec<String> = words
                .into_iter()
                .filter(|word| seen.insert(*word))
                .map(String::from)
                .collect();
            (distinct.len() >= MIN_RHYME_GROUP).then_some((key, distinct))
        })
        .collect()
}

/// Lowercased union of every word in the difficulty buckets
#[must_use]
pub fn build_valid_words(by_difficulty: &WordsByDifficulty) -> FxHashSet<String> {
    by_difficulty
        .iter()
        .map(|record| record.word().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn records(words: &[&str]) -> Vec<WordRecord> {
        words.iter().filter_map(|w| WordRecord::new(w)).collect()
    }

    fn phonetic(word: &str, sounds: &str) -> PhoneticRecord {
        PhoneticRecord::new(word, sounds).unwrap()
    }

    #[test]
    fn difficulty_buckets_follow_length() {
        let buckets = build_by_difficulty(&records(&["cat", "houses", "a"]));

        let easy: Vec<&str> = buckets.easy.iter().map(WordRecord::word).collect();
        let medium: Vec<&str> = buckets.medium.iter().map(WordRecord::word).collect();
        assert_eq!(easy, ["cat", "a"]);
        assert_eq!(medium, ["houses"]);
        assert!(buckets.hard.is_empty());
    }

    #[test]
    fn every_bucket_entry_has_its_level() {
        let buckets = build_by_difficulty(&records(&["a", "four", "seven", "sevenxx", "eightxxx"]));
        for level in Difficulty::ALL {
            assert!(buckets.bucket(level).iter().all(|r| r.difficulty() == level));
        }
        assert_eq!(buckets.len(), 5);
    }

    #[test]
    fn length_keys_are_exact() {
        let by_length = build_by_length(&records(&["slate", "crane", "crate", "a", "houses"]));
        for (&length, words) in &by_length {
            assert!(words.iter().all(|w| w.chars().count() == length));
        }
        assert_eq!(by_length[&5].len(), 3);
        assert_eq!(by_length[&1], ["a"]);
        assert_eq!(by_length[&6], ["houses"]);
    }

    #[test]
    fn length_buckets_cover_every_record_once() {
        let input = records(&["b", "a", "b", "abc"]);
        let by_length = build_by_length(&input);
        let total: usize = by_length.values().map(Vec::len).sum();
        assert_eq!(total, input.len());
    }

    #[test]
    fn rhyme_groups_require_three_distinct_words() {
        let phonetics = vec![
            phonetic("cat", "K AE T"),
            phonetic("hat", "HH AE T"),
            phonetic("bat", "B AE T"),
            phonetic("dog", "D AO G"),
            phonetic("log", "L AO G"),
            phonetic("log", "L AO G"),
            phonetic("fog", "F AO G"),
        ];
        let groups = build_rhyme_groups(&phonetics);

        assert_eq!(groups["AE T"], ["cat", "hat", "bat"]);
        assert_eq!(groups["AO G"], ["dog", "log", "fog"]);
    }

    #[test]
    fn duplicate_words_do_not_satisfy_threshold() {
        // Three records but only two distinct words
        let phonetics = vec![
            phonetic("read", "R EH D"),
            phonetic("read", "R EH D"),
            phonetic("bed", "B EH D"),
        ];
        assert!(build_rhyme_groups(&phonetics).is_empty());
    }

    #[test]
    fn single_sound_records_ignored() {
        let phonetics = vec![
            phonetic("oh", "OW"),
            phonetic("owe", "OW"),
            phonetic("eau", "OW"),
        ];
        assert!(build_rhyme_groups(&phonetics).is_empty());
    }

    #[test]
    fn rhyme_group_entries_match_key() {
        let phonetics = vec![
            phonetic("station", "S T EY1 SH AH0 N"),
            phonetic("nation", "N EY1 SH AH0 N"),
            phonetic("lesson", "L EH1 S AH0 N"),
            phonetic("cat", "K AE T"),
        ];
        let groups = build_rhyme_groups(&phonetics);
        for (key, words) in &groups {
            assert!(words.len() >= MIN_RHYME_GROUP);
            for word in words {
                let record = phonetics.iter().find(|p| p.word() == word).unwrap();
                assert_eq!(record.rhyme_key().as_deref(), Some(key.as_str()));
            }
        }
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn valid_words_union_of_buckets() {
        let buckets = build_by_difficulty(&records(&["Cat", "houses", "encyclopedia", "cat"]));
        let valid = build_valid_words(&buckets);
        assert_eq!(valid.len(), 3);
        assert!(valid.contains("cat"));
        assert!(valid.contains("encyclopedia"));
    }
}
