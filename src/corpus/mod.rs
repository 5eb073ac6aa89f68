//! Raw corpus parsers
//!
//! Three independent parsers, one per corpus format. Each turns raw text into
//! normalized records plus diagnostic counts. Malformed lines never fail a
//! parse; only an unreadable source does.

pub mod definitions;
pub mod phonetic;
pub mod wordlist;

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use definitions::{DEFAULT_HEADER_LINES, DefinitionParserConfig, parse_definitions};
pub use phonetic::parse_phonetics;
pub use wordlist::parse_word_list;

/// File name of the word-list corpus inside a source directory
pub const WORD_LIST_FILE: &str = "words_alpha.txt";
/// File name of the phonetic corpus inside a source directory
pub const PHONETIC_FILE: &str = "cmudict-0.7b";
/// File name of the definitions corpus inside a source directory
pub const DEFINITIONS_FILE: &str = "WebstersEnglishDictionary.txt";

/// Which corpus a record or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    WordList,
    Phonetic,
    Definitions,
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordList => write!(f, "word list"),
            Self::Phonetic => write!(f, "phonetic dictionary"),
            Self::Definitions => write!(f, "definitions dictionary"),
        }
    }
}

/// Error raised when a corpus cannot be read at all
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot read {corpus} at {}: {source}", path.display())]
    Unreadable {
        corpus: CorpusKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Diagnostic line counts gathered while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines examined
    pub lines: usize,
    /// Comment, blank or header lines
    pub skipped: usize,
    /// Lines or entries whose structure could not be recognized
    pub unparseable: usize,
    /// Structurally valid units rejected by content rules
    pub rejected: usize,
}

/// Records produced by one parser run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub stats: ParseStats,
}

impl<T> Parsed<T> {
    /// An empty result, used when an optional corpus is absent
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: ParseStats::default(),
        }
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

/// Read a whole source, replacing invalid UTF-8 sequences
///
/// The phonetic corpus ships with a few Latin-1 bytes, so strict decoding
/// would reject otherwise usable input.
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_lossy<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Open and read a corpus file, tagging failures with the corpus kind
pub(crate) fn read_corpus_file(corpus: CorpusKind, path: &Path) -> Result<String, CorpusError> {
    let unreadable = |source| CorpusError::Unreadable {
        corpus,
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    read_lossy(file).map_err(unreadable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lossy_accepts_latin1_bytes() {
        let bytes: &[u8] = b"CAF\xC9  K AE F EY1\n";
        let text = read_lossy(bytes).unwrap();
        assert!(text.starts_with("CAF"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = read_corpus_file(CorpusKind::Phonetic, Path::new("/nonexistent/cmudict"))
            .unwrap_err();
        let CorpusError::Unreadable { corpus, path, .. } = &err;
        assert_eq!(*corpus, CorpusKind::Phonetic);
        assert_eq!(path, Path::new("/nonexistent/cmudict"));
        assert!(err.to_string().contains("phonetic dictionary"));
    }

    #[test]
    fn empty_parsed_has_no_records() {
        let parsed: Parsed<String> = Parsed::empty();
        assert!(parsed.is_empty());
        assert_eq!(parsed.stats, ParseStats::default());
    }
}
