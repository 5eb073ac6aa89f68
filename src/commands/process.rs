//! Corpus processing: parse raw sources, build indices, write them out

use crate::core::{DefinitionRecord, PhoneticRecord, WordRecord};
use crate::corpus::{
    CorpusError, CorpusKind, DEFINITIONS_FILE, DefinitionParserConfig, PHONETIC_FILE, ParseStats,
    Parsed, WORD_LIST_FILE, definitions::load_definitions_from_file,
    phonetic::load_phonetics_from_file, wordlist::load_word_list_from_file,
};
use crate::dictionary::{DictionaryStats, DictionaryStore};
use crate::persist::{PersistError, save_indices};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Outcome of parsing one corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusReport {
    pub corpus: CorpusKind,
    pub records: usize,
    pub stats: ParseStats,
    /// The corpus is optional and its file was not found
    pub missing: bool,
}

#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub corpora: Vec<CorpusReport>,
    pub dictionary: DictionaryStats,
    pub duration: Duration,
}

/// Parsed records from all three corpora
#[derive(Debug)]
pub struct ParsedSources {
    pub words: Parsed<WordRecord>,
    pub phonetics: Parsed<PhoneticRecord>,
    pub definitions: Parsed<DefinitionRecord>,
    pub definitions_missing: bool,
}

impl ParsedSources {
    #[must_use]
    pub fn reports(&self) -> Vec<CorpusReport> {
        vec![
            CorpusReport {
                corpus: CorpusKind::WordList,
                records: self.words.len(),
                stats: self.words.stats,
                missing: false,
            },
            CorpusReport {
                corpus: CorpusKind::Phonetic,
                records: self.phonetics.len(),
                stats: self.phonetics.stats,
                missing: false,
            },
            CorpusReport {
                corpus: CorpusKind::Definitions,
                records: self.definitions.len(),
                stats: self.definitions.stats,
                missing: self.definitions_missing,
            },
        ]
    }
}

/// Parse the three corpora in `source`, in parallel
///
/// The word list and phonetic dictionary are required. The definitions
/// dictionary is skipped with a warning when its file does not exist.
///
/// # Errors
/// Returns [`CorpusError::Unreadable`] for the first corpus that exists but
/// cannot be read, or for a missing required corpus.
pub fn parse_sources(source: &Path) -> Result<ParsedSources, CorpusError> {
    let definitions_path = source.join(DEFINITIONS_FILE);
    let definitions_missing = !definitions_path.exists();
    if definitions_missing {
        log::warn!(
            "{} not found, building without definitions",
            definitions_path.display()
        );
    }

    let ((words, phonetics), definitions) = rayon::join(
        || {
            rayon::join(
                || load_word_list_from_file(source.join(WORD_LIST_FILE)),
                || load_phonetics_from_file(source.join(PHONETIC_FILE)),
            )
        },
        || {
            if definitions_missing {
                Ok(Parsed::empty())
            } else {
                load_definitions_from_file(&definitions_path, DefinitionParserConfig::default())
            }
        },
    );

    Ok(ParsedSources {
        words: words?,
        phonetics: phonetics?,
        definitions: definitions?,
        definitions_missing,
    })
}

/// Run the whole pipeline from raw corpora in `source` to JSON indices in `data`
///
/// # Errors
/// Returns [`ProcessError`] if a corpus cannot be read or the indices cannot
/// be written.
pub fn run_process(source: &Path, data: &Path) -> Result<ProcessReport, ProcessError> {
    let start = Instant::now();
    let spinner = spinner();

    spinner.set_message(format!("Parsing corpora in {}", source.display()));
    let sources = parse_sources(source)?;
    let corpora = sources.reports();

    spinner.set_message("Building indices");
    let store = DictionaryStore::from_corpora(
        &sources.words.records,
        sources.phonetics.records,
        sources.definitions.records,
    );

    spinner.set_message(format!("Writing indices to {}", data.display()));
    save_indices(data, store.indices())?;
    spinner.finish_and_clear();

    Ok(ProcessReport {
        corpora,
        dictionary: store.stats(),
        duration: start.elapsed(),
    })
}

fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
