//! Core domain records
//!
//! Plain data produced by the corpus parsers and consumed by the indices.
//! Everything here is immutable once constructed.

mod definition;
mod letters;
mod phonetic;
mod word;

pub use definition::DefinitionRecord;
pub use letters::LetterCounts;
pub use phonetic::PhoneticRecord;
pub use word::{BlankWordError, Difficulty, WordRecord};
