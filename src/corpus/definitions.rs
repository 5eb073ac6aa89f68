//! Prose dictionary parser
//!
//! The definitions corpus is a plain-text dictionary: a fixed introduction,
//! then entries that start with an upper-case headword line, an optional
//! `pronunciation, part-of-speech.` line, and definition paragraphs opened by
//! `Defn:` or a numbered `1.` marker.
//!
//! Parsing is a forward scan driven by [`ScanState`]. Anything the scan does
//! not recognize is skipped until the next headword, so malformed regions never
//! produce an error.

use super::{CorpusError, CorpusKind, ParseStats, Parsed, read_corpus_file, read_lossy};
use crate::core::DefinitionRecord;
use regex::Regex;
use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;

/// Introductory lines of the corpus that precede the first entry
pub const DEFAULT_HEADER_LINES: usize = 27;

const DEFN_MARKER: &str = "Defn:";

static PRONUNCIATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^,]+),\s*([^.]+)\.").expect("valid pronunciation pattern")
});

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid numbered marker pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid bracket pattern"));

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionParserConfig {
    /// Lines skipped unconditionally at the start of the input
    pub header_lines: usize,
}

impl Default for DefinitionParserConfig {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}

/// Position of the scan within an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekHeadword,
    SeekPronunciation,
    SeekDefinitionStart,
    InDefinitionBody,
}

/// A line consisting only of `A-Z`, spaces, apostrophes and hyphens
fn is_headword(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || matches!(c, ' ' | '\'' | '-'))
}

/// Text following a `Defn:` or `<digits>.` marker, if the line opens a paragraph
fn strip_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix(DEFN_MARKER) {
        return Some(rest.trim());
    }
    NUMBERED_MARKER
        .find(line)
        .map(|marker| line[marker.end()..].trim())
}

/// Join paragraph lines and remove formatting artifacts
///
/// # Examples
/// ```
/// use wordplay::corpus::definitions::normalize_paragraph;
///
/// let text = normalize_paragraph(&["To lower;  as, to abase", "the eye. [Obs.] [Etym: F.]"]);
/// assert_eq!(text, "To lower; as, to abase the eye. (Obsolete)");
/// ```
#[must_use]
pub fn normalize_paragraph(lines: &[&str]) -> String {
    let joined = lines.join(" ").replace("[Obs.]", "(Obsolete)");
    let stripped = BRACKETED.replace_all(&joined, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Entry under construction
struct EntryDraft {
    word: String,
    pronunciation: Option<String>,
    part_of_speech: Option<String>,
    definitions: Vec<String>,
}

impl EntryDraft {
    fn new(headword: &str) -> Self {
        Self {
            word: headword.to_lowercase(),
            pronunciation: None,
            part_of_speech: None,
            definitions: Vec::new(),
        }
    }

    fn into_record(self) -> Option<DefinitionRecord> {
        if self.definitions.is_empty() {
            return None;
        }
        Some(DefinitionRecord {
            word: self.word,
            definitions: self.definitions,
            part_of_speech: self.part_of_speech,
            pronunciation: self.pronunciation,
        })
    }
}

/// Scanner over the indexed line sequence
struct Scanner<'t> {
    lines: Vec<&'t str>,
    index: usize,
    state: ScanState,
    draft: Option<EntryDraft>,
    paragraph: Vec<&'t str>,
    records: Vec<DefinitionRecord>,
    stats: ParseStats,
}

impl<'t> Scanner<'t> {
    fn new(text: &'t str, config: DefinitionParserConfig) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let header = config.header_lines.min(lines.len());
        let stats = ParseStats {
            lines: lines.len(),
            skipped: header,
            ..ParseStats::default()
        };

        Self {
            lines,
            index: header,
            state: ScanState::SeekHeadword,
            draft: None,
            paragraph: Vec::new(),
            records: Vec::new(),
            stats,
        }
    }

    fn run(mut self) -> Parsed<DefinitionRecord> {
        while self.index < self.lines.len() {
            let line: &'t str = self.lines[self.index];
            self.step(line.trim());
        }

        if self.state == ScanState::InDefinitionBody {
            self.close_paragraph();
        }
        self.finish_entry();

        Parsed {
            records: self.records,
            stats: self.stats,
        }
    }

    /// Advance the state machine by one decision; consumes at most one line
    fn step(&mut self, line: &'t str) {
        match self.state {
            ScanState::SeekHeadword => {
                if is_headword(line) {
                    self.draft = Some(EntryDraft::new(line));
                    self.state = ScanState::SeekPronunciation;
                }
                self.index += 1;
            }
            ScanState::SeekPronunciation => {
                if !line.is_empty()
                    && strip_marker(line).is_none()
                    && let Some(caps) = PRONUNCIATION_LINE.captures(line)
                {
                    if let Some(draft) = self.draft.as_mut() {
                        draft.pronunciation = Some(caps[1].trim().to_string());
                        draft.part_of_speech = Some(caps[2].trim().to_string());
                    }
                    self.index += 1;
                }
                self.state = ScanState::SeekDefinitionStart;
            }
            ScanState::SeekDefinitionStart => {
                if is_headword(line) {
                    self.finish_entry();
                    self.state = ScanState::SeekHeadword;
                } else if let Some(rest) = strip_marker(line) {
                    self.paragraph.clear();
                    if !rest.is_empty() {
                        self.paragraph.push(rest);
                    }
                    self.state = ScanState::InDefinitionBody;
                    self.index += 1;
                } else {
                    self.index += 1;
                }
            }
            ScanState::InDefinitionBody => {
                if line.is_empty() {
                    self.close_paragraph();
                    self.index += 1;
                } else if strip_marker(line).is_some() || is_headword(line) {
                    self.close_paragraph();
                } else {
                    self.paragraph.push(line);
                    self.index += 1;
                }
            }
        }
    }

    fn close_paragraph(&mut self) {
        let text = normalize_paragraph(&self.paragraph);
        self.paragraph.clear();
        self.state = ScanState::SeekDefinitionStart;

        if !text.is_empty()
            && let Some(draft) = self.draft.as_mut()
        {
            draft.definitions.push(text);
        }
    }

    fn finish_entry(&mut self) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        match draft.into_record() {
            Some(record) => self.records.push(record),
            None => self.stats.rejected += 1,
        }
    }
}

/// Parse definitions text with the default header length
#[must_use]
pub fn parse_definitions(text: &str) -> Parsed<DefinitionRecord> {
    parse_definitions_with(text, DefinitionParserConfig::default())
}

/// Parse definitions text
///
/// Every raw entry is returned in input order, including repeated headwords.
///
/// # Examples
/// ```
/// use wordplay::corpus::definitions::{DefinitionParserConfig, parse_definitions_with};
///
/// let text = "ABASE\nA*base\", v. t.\n\nDefn: To lower.\n";
/// let config = DefinitionParserConfig { header_lines: 0 };
/// let parsed = parse_definitions_with(text, config);
///
/// let entry = &parsed.records[0];
/// assert_eq!(entry.word, "abase");
/// assert_eq!(entry.definitions, ["To lower."]);
/// assert_eq!(entry.part_of_speech.as_deref(), Some("v"));
/// ```
#[must_use]
pub fn parse_definitions_with(
    text: &str,
    config: DefinitionParserConfig,
) -> Parsed<DefinitionRecord> {
    let parsed = Scanner::new(text, config).run();

    log::debug!(
        "definitions: {} entries from {} lines ({} without definitions)",
        parsed.records.len(),
        parsed.stats.lines,
        parsed.stats.rejected
    );

    parsed
}

/// Parse a definitions corpus from any reader
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_definitions<R: Read>(
    reader: R,
    config: DefinitionParserConfig,
) -> io::Result<Parsed<DefinitionRecord>> {
    Ok(parse_definitions_with(&read_lossy(reader)?, config))
}

/// Load a definitions corpus from a file
///
/// # Errors
///
/// Returns `CorpusError::Unreadable` if the file cannot be opened or read.
pub fn load_definitions_from_file<P: AsRef<Path>>(
    path: P,
    config: DefinitionParserConfig,
) -> Result<Parsed<DefinitionRecord>, CorpusError> {
    let text = read_corpus_file(CorpusKind::Definitions, path.as_ref())?;
    Ok(parse_definitions_with(&text, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_HEADER: DefinitionParserConfig = DefinitionParserConfig { header_lines: 0 };

    fn parse(text: &str) -> Parsed<DefinitionRecord> {
        parse_definitions_with(text, NO_HEADER)
    }

    #[test]
    fn headword_detection() {
        assert!(is_headword("ABASE"));
        assert!(is_headword("A PRIORI"));
        assert!(is_headword("O'CLOCK"));
        assert!(is_headword("WELL-BEING"));
        assert!(!is_headword(""));
        assert!(!is_headword("Abase"));
        assert!(!is_headword("ABASE."));
        assert!(!is_headword("A1"));
    }

    #[test]
    fn marker_stripping() {
        assert_eq!(strip_marker("Defn: To lower."), Some("To lower."));
        assert_eq!(strip_marker("2. To cast down."), Some("To cast down."));
        assert_eq!(strip_marker("12.Without space"), Some("Without space"));
        assert_eq!(strip_marker("Syn. -- To lower."), None);
        assert_eq!(strip_marker("Defn:"), Some(""));
    }

    #[test]
    fn numbered_definitions_with_pronunciation() {
        let text = "\
ABASE
A*base\", v. t. [imp. & p. p. Abased; p. pr. & vb. n. Abasing.] Etym: [F.
abaisser, LL. abassare.]

1. To lower or depress; to throw or cast down; as, to abase the eye.
[Obs.] Bacon.

2. To cast down or reduce low or lower, as in rank, office, or
condition in life.
";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 1);

        let entry = &parsed.records[0];
        assert_eq!(entry.word, "abase");
        assert_eq!(entry.pronunciation.as_deref(), Some("A*base\""));
        assert_eq!(entry.part_of_speech.as_deref(), Some("v"));
        assert_eq!(
            entry.definitions,
            [
                "To lower or depress; to throw or cast down; as, to abase the eye. (Obsolete) Bacon.",
                "To cast down or reduce low or lower, as in rank, office, or condition in life.",
            ]
        );
    }

    #[test]
    fn defn_marker_paragraph() {
        let text = "ABACK\nA*back\", adv.\n\nDefn: Toward the back or rear; backward.\n";
        let parsed = parse(text);
        assert_eq!(parsed.records[0].definitions, ["Toward the back or rear; backward."]);
        assert_eq!(parsed.records[0].part_of_speech.as_deref(), Some("adv"));
    }

    #[test]
    fn paragraph_stops_at_next_marker_without_blank_line() {
        let text = "WORD\n\nDefn: First sense\ncontinued.\n2. Second sense.\n";
        let parsed = parse(text);
        assert_eq!(
            parsed.records[0].definitions,
            ["First sense continued.", "Second sense."]
        );
    }

    #[test]
    fn paragraph_stops_at_next_headword() {
        let text = "ONE\n\nDefn: The first number\nTWO\n\nDefn: The second number.\n";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.records[0].definitions, ["The first number"]);
        assert_eq!(parsed.records[1].word, "two");
    }

    #[test]
    fn non_matching_line_after_headword_is_left_for_body() {
        // No comma/period pattern, so the line is not consumed as pronunciation
        let text = "AB\nDefn: Abbreviation of something.\n";
        let parsed = parse(text);
        let entry = &parsed.records[0];
        assert!(entry.pronunciation.is_none());
        assert!(entry.part_of_speech.is_none());
        assert_eq!(entry.definitions, ["Abbreviation of something."]);
    }

    #[test]
    fn entry_without_definitions_is_discarded() {
        let text = "NOTHING\nNoth\"ing, n.\n\nSyn. -- Nought.\n\nSOMETHING\n\nDefn: A thing.\n";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.records[0].word, "something");
        assert_eq!(parsed.stats.rejected, 1);
    }

    #[test]
    fn bracketed_spans_removed() {
        let text = "WORD\n\nDefn: A thing [R.] used [Colloq.] often.\n";
        let parsed = parse(text);
        assert_eq!(parsed.records[0].definitions, ["A thing used often."]);
    }

    #[test]
    fn empty_paragraph_text_dropped() {
        let text = "WORD\n\nDefn: [Obsolete form]\n\nDefn: Real meaning.\n";
        let parsed = parse(text);
        assert_eq!(parsed.records[0].definitions, ["Real meaning."]);
    }

    #[test]
    fn header_lines_skipped_unconditionally() {
        let mut text = String::new();
        for _ in 0..DEFAULT_HEADER_LINES - 1 {
            text.push_str("INTRODUCTION\n");
        }
        text.push_str("PREFACE\n");
        text.push_str("CAT\n\nDefn: A small feline.\n");

        let parsed = parse_definitions(&text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.records[0].word, "cat");
        assert_eq!(parsed.stats.skipped, DEFAULT_HEADER_LINES);
    }

    #[test]
    fn duplicate_headwords_emitted_separately() {
        let text = "BOW\n\nDefn: To bend.\n\nBOW\n\nDefn: A weapon.\n";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 2);
        assert!(parsed.records.iter().all(|r| r.word == "bow"));
    }

    #[test]
    fn multi_word_headword_lowercased() {
        let text = "A PRIORI\n\nDefn: From the cause to the effect.\n";
        assert_eq!(parse(text).records[0].word, "a priori");
    }

    #[test]
    fn garbage_between_entries_is_skipped() {
        let text = "random prose line\nmore prose.\nCAT\n\nDefn: A feline.\n";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn input_ending_inside_paragraph() {
        let parsed = parse("CAT\n\nDefn: A feline");
        assert_eq!(parsed.records[0].definitions, ["A feline"]);
    }

    #[test]
    fn header_longer_than_input() {
        let parsed = parse_definitions("CAT\n\nDefn: A feline.\n");
        assert!(parsed.is_empty());
    }
}
