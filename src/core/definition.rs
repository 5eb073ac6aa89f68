//! Dictionary definition records

use serde::{Deserialize, Serialize};

/// Definitions of one headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRecord {
    pub word: String,
    pub definitions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl DefinitionRecord {
    /// First definition paragraph
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.definitions.first().map(String::as_str)
    }

    /// Fold a later entry for the same headword into this one
    ///
    /// Metadata already present is kept; definitions are appended in order.
    pub fn absorb(&mut self, later: Self) {
        debug_assert_eq!(self.word, later.word);
        if self.part_of_speech.is_none() {
            self.part_of_speech = later.part_of_speech;
        }
        if self.pronunciation.is_none() {
            self.pronunciation = later.pronunciation;
        }
        self.definitions.extend(later.definitions);
    }
}
