//! Phonetic transcription records

use serde::{Deserialize, Serialize};

/// One pronunciation of a word
///
/// A word can have several records, one per pronunciation variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticRecord {
    word: String,
    #[serde(alias = "phonetic")]
    phonetic_transcription: String,
    sounds: Vec<String>,
}

impl PhoneticRecord {
    /// Build a record from a cleaned word and its transcription
    ///
    /// Returns `None` if the transcription holds no phonemes.
    #[must_use]
    pub fn new(word: impl Into<String>, transcription: &str) -> Option<Self> {
        let sounds: Vec<String> = transcription.split_whitespace().map(String::from).collect();
        if sounds.is_empty() {
            return None;
        }

        Some(Self {
            word: word.into(),
            phonetic_transcription: sounds.join(" "),
            sounds,
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn transcription(&self) -> &str {
        &self.phonetic_transcription
    }

    #[inline]
    #[must_use]
    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    /// The last two phonemes joined by a single space
    ///
    /// Returns `None` when the word has fewer than two phonemes.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::PhoneticRecord;
    ///
    /// let record = PhoneticRecord::new("cat", "K AE T").unwrap();
    /// assert_eq!(record.rhyme_key().as_deref(), Some("AE T"));
    ///
    /// let short = PhoneticRecord::new("eh", "EH").unwrap();
    /// assert!(short.rhyme_key().is_none());
    /// ```
    #[must_use]
    pub fn rhyme_key(&self) -> Option<String> {
        match self.sounds.as_slice() {
            [.., penultimate, last] => Some(format!("{penultimate} {last}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_splits_on_any_whitespace() {
        let record = PhoneticRecord::new("read", " R  EH\tD ").unwrap();
        assert_eq!(record.sounds(), ["R", "EH", "D"]);
        assert_eq!(record.transcription(), "R EH D");
    }

    #[test]
    fn new_rejects_empty_transcription() {
        assert!(PhoneticRecord::new("cat", "   ").is_none());
    }

    #[test]
    fn rhyme_key_uses_last_two_sounds() {
        let record = PhoneticRecord::new("station", "S T EY1 SH AH0 N").unwrap();
        assert_eq!(record.rhyme_key().as_deref(), Some("AH0 N"));
    }

    #[test]
    fn deserializes_legacy_field_name() {
        let json = r#"{"word":"cat","phonetic":"K AE T","sounds":["K","AE","T"]}"#;
        let record: PhoneticRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.transcription(), "K AE T");
    }

    #[test]
    fn serializes_camel_case() {
        let record = PhoneticRecord::new("cat", "K AE T").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""phoneticTranscription":"K AE T""#));
    }
}
