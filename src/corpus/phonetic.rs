//! Phonetic dictionary parser
//!
//! Data lines look like `WORD  PH O NE MES`, with the word and phoneme fields
//! separated by two or more spaces. `;;;` lines are comments. A word may carry
//! a pronunciation-variant suffix such as `READ(1)`, which is stripped so all
//! variants share one key.

use super::{CorpusError, CorpusKind, ParseStats, Parsed, read_corpus_file, read_lossy};
use crate::core::PhoneticRecord;
use regex::Regex;
use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;

const COMMENT_PREFIX: &str = ";;;";

/// Minimum length of a cleaned word
const MIN_WORD_LENGTH: usize = 2;

static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid field separator pattern"));

static VARIANT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([0-9]+\)$").expect("valid variant suffix pattern"));

/// Outcome of examining a single line
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Record(PhoneticRecord),
    Skipped,
    Unparseable,
    Rejected,
}

/// Strip the variant suffix, lowercase, and drop characters outside `[a-z'-]`
///
/// # Examples
/// ```
/// use wordplay::corpus::phonetic::clean_word;
///
/// assert_eq!(clean_word("READ(1)"), "read");
/// assert_eq!(clean_word("O'BRIEN"), "o'brien");
/// assert_eq!(clean_word("!EXCLAMATION-POINT"), "exclamation-point");
/// ```
#[must_use]
pub fn clean_word(field: &str) -> String {
    VARIANT_SUFFIX
        .replace(field.trim(), "")
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c == '\'' || c == '-')
        .collect()
}

fn classify_line(line: &str) -> LineOutcome {
    if line.starts_with(COMMENT_PREFIX) || line.trim().is_empty() {
        return LineOutcome::Skipped;
    }

    let mut fields = FIELD_SEPARATOR.split(line);
    let word_field = fields.next().unwrap_or_default();
    let phoneme_field = fields.collect::<Vec<_>>().join(" ");
    let phoneme_field = phoneme_field.trim();

    if phoneme_field.is_empty() {
        return LineOutcome::Unparseable;
    }

    let word = clean_word(word_field);
    if word.len() < MIN_WORD_LENGTH || !word.chars().any(|c| c.is_ascii_lowercase()) {
        return LineOutcome::Rejected;
    }

    PhoneticRecord::new(word, phoneme_field).map_or(LineOutcome::Unparseable, LineOutcome::Record)
}

/// Parse phonetic dictionary text
///
/// # Examples
/// ```
/// use wordplay::corpus::parse_phonetics;
///
/// let parsed = parse_phonetics(";;; header\nCAT  K AE T\nREAD(1)  R EH D\n");
/// assert_eq!(parsed.records[0].word(), "cat");
/// assert_eq!(parsed.records[0].sounds(), ["K", "AE", "T"]);
/// assert_eq!(parsed.records[1].word(), "read");
/// ```
#[must_use]
pub fn parse_phonetics(text: &str) -> Parsed<PhoneticRecord> {
    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    for line in text.lines() {
        stats.lines += 1;
        match classify_line(line) {
            LineOutcome::Record(record) => records.push(record),
            LineOutcome::Skipped => stats.skipped += 1,
            LineOutcome::Unparseable => {
                if stats.unparseable < 5 {
                    log::debug!("unparseable phonetic line: {line:.50}");
                }
                stats.unparseable += 1;
            }
            LineOutcome::Rejected => stats.rejected += 1,
        }
    }

    log::debug!(
        "phonetics: {} records, {} skipped, {} unparseable, {} rejected",
        records.len(),
        stats.skipped,
        stats.unparseable,
        stats.rejected
    );

    Parsed { records, stats }
}

/// Parse a phonetic dictionary from any reader
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_phonetics<R: Read>(reader: R) -> io::Result<Parsed<PhoneticRecord>> {
    Ok(parse_phonetics(&read_lossy(reader)?))
}

/// Load a phonetic dictionary from a file
///
/// # Errors
///
/// Returns `CorpusError::Unreadable` if the file cannot be opened or read.
pub fn load_phonetics_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Parsed<PhoneticRecord>, CorpusError> {
    let text = read_corpus_file(CorpusKind::Phonetic, path.as_ref())?;
    Ok(parse_phonetics(&text))
}
