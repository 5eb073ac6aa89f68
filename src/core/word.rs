//! Word-list records and difficulty classification
//!
//! A `WordRecord` is one normalized entry of the flat word list. Its length and
//! difficulty are fixed at construction and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty bucket of a word, derived purely from its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Classify a word length
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_length(4), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_length(7), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_length(8), Difficulty::Hard);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_length(length: usize) -> Self {
        if length <= 4 {
            Self::Easy
        } else if length <= 7 {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    /// Lowercase name, as used in serialized documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

/// One entry of the word-list corpus
///
/// Invariants: `word` is trimmed and lowercase, `length` is its code-point
/// count and `difficulty == Difficulty::from_length(length)`. Deserialized
/// records are rebuilt from `word`, so stored `length`/`difficulty` values
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredWordRecord")]
pub struct WordRecord {
    word: String,
    length: usize,
    difficulty: Difficulty,
}

impl WordRecord {
    /// Normalize raw text into a record
    ///
    /// Returns `None` for text that is blank after trimming.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::{Difficulty, WordRecord};
    ///
    /// let record = WordRecord::new("  Houses\r").unwrap();
    /// assert_eq!(record.word(), "houses");
    /// assert_eq!(record.length(), 6);
    /// assert_eq!(record.difficulty(), Difficulty::Medium);
    ///
    /// assert!(WordRecord::new("   ").is_none());
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let word = text.trim().to_lowercase();
        if word.is_empty() {
            return None;
        }

        let length = word.chars().count();
        Some(Self {
            word,
            length,
            difficulty: Difficulty::from_length(length),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Consume the record, keeping only the word
    #[must_use]
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Serialized shape of a [`WordRecord`]; only the word is trusted
#[derive(Deserialize)]
struct StoredWordRecord {
    word: String,
}

#[derive(Debug, thiserror::Error)]
#[error("word-list record has a blank word")]
pub struct BlankWordError;

impl TryFrom<StoredWordRecord> for WordRecord {
    type Error = BlankWordError;

    fn try_from(stored: StoredWordRecord) -> Result<Self, Self::Error> {
        Self::new(&stored.word).ok_or(BlankWordError)
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
