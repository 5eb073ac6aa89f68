//! Flat word-list parser
//!
//! One token per line, arbitrary case. Every non-blank line becomes a
//! `WordRecord`; nothing else is validated.

use super::{CorpusError, CorpusKind, ParseStats, Parsed, read_corpus_file, read_lossy};
use crate::core::WordRecord;
use std::io::{self, Read};
use std::path::Path;

/// Parse word-list text
///
/// # Examples
/// ```
/// use wordplay::corpus::parse_word_list;
///
/// let parsed = parse_word_list("Cat\n\nhouses\na\n");
/// let words: Vec<&str> = parsed.records.iter().map(|r| r.word()).collect();
/// assert_eq!(words, ["cat", "houses", "a"]);
/// assert_eq!(parsed.stats.skipped, 1);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Parsed<WordRecord> {
    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    for line in text.lines() {
        stats.lines += 1;
        match WordRecord::new(line) {
            Some(record) => records.push(record),
            None => stats.skipped += 1,
        }
    }

    log::debug!(
        "word list: {} records from {} lines ({} blank)",
        records.len(),
        stats.lines,
        stats.skipped
    );

    Parsed { records, stats }
}

/// Parse a word list from any reader
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_word_list<R: Read>(reader: R) -> io::Result<Parsed<WordRecord>> {
    Ok(parse_word_list(&read_lossy(reader)?))
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `CorpusError::Unreadable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordplay::corpus::wordlist::load_word_list_from_file;
///
/// let parsed = load_word_list_from_file("dictionaries/words_alpha.txt").unwrap();
/// println!("Loaded {} words", parsed.len());
/// ```
pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<Parsed<WordRecord>, CorpusError> {
    let text = read_corpus_file(CorpusKind::WordList, path.as_ref())?;
    Ok(parse_word_list(&text))
}
