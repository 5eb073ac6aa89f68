//! Query layer for games
//!
//! [`DictionaryStore`] answers validity, lookup, sampling, rhyme, definition
//! and anagram queries over prebuilt [`Indices`](crate::index::Indices).

mod slot;
mod store;

pub use slot::DictionarySlot;
pub use store::{DictionaryStats, DictionaryStore, SampleSource};

use thiserror::Error;

/// Default minimum group size for [`DictionaryStore::random_rhyme_group`]
pub const DEFAULT_MIN_RHYME_WORDS: usize = 3;

/// Default minimum word length for anagram searches
pub const DEFAULT_MIN_FORMABLE_LENGTH: usize = 3;

/// Default maximum word length for word-search puzzles
pub const DEFAULT_WORD_SEARCH_MAX_LENGTH: usize = 10;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary has not been loaded")]
    NotLoaded,

    #[error("dictionary is already loaded")]
    AlreadyLoaded,
}
