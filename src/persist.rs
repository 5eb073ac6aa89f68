//! Saving and loading built indices
//!
//! Each index is written as its own JSON document in a data directory. Writes
//! go to a temporary file in the same directory and are renamed into place,
//! so readers never see a half-written document.

use crate::index::{DefinitionIndex, Indices};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const WORDS_BY_DIFFICULTY_FILE: &str = "words-by-difficulty.json";
pub const WORDS_BY_LENGTH_FILE: &str = "words-by-length.json";
pub const PHONETICS_FILE: &str = "phonetics.json";
pub const RHYME_GROUPS_FILE: &str = "rhyme-groups.json";
pub const DEFINITIONS_FILE: &str = "definitions.json";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write every index into `dir`, creating it if needed
///
/// # Errors
/// Returns [`PersistError`] if the directory cannot be created or a document
/// cannot be written.
pub fn save_indices(dir: &Path, indices: &Indices) -> Result<(), PersistError> {
    fs::create_dir_all(dir).map_err(|e| PersistError::io(dir, e))?;

    write_json(&dir.join(WORDS_BY_DIFFICULTY_FILE), &indices.words_by_difficulty)?;
    write_json(&dir.join(WORDS_BY_LENGTH_FILE), &indices.words_by_length)?;
    write_json(&dir.join(PHONETICS_FILE), &indices.phonetics)?;
    write_json(&dir.join(RHYME_GROUPS_FILE), &indices.rhyme_groups)?;
    write_json(&dir.join(DEFINITIONS_FILE), &indices.definitions)?;

    log::info!("saved indices to {}", dir.display());
    Ok(())
}

/// Read every index from `dir`
///
/// The definitions document is optional; when it is absent the loaded indices
/// have no definitions.
///
/// # Errors
/// Returns [`PersistError`] if a required document is missing or unreadable,
/// or any document is not valid JSON of the expected shape.
pub fn load_indices(dir: &Path) -> Result<Indices, PersistError> {
    let definitions_path = dir.join(DEFINITIONS_FILE);
    let definitions = if definitions_path.exists() {
        read_json(&definitions_path)?
    } else {
        log::warn!(
            "{} not found, continuing without definitions",
            definitions_path.display()
        );
        DefinitionIndex::default()
    };

    let indices = Indices {
        words_by_difficulty: read_json(&dir.join(WORDS_BY_DIFFICULTY_FILE))?,
        words_by_length: read_json(&dir.join(WORDS_BY_LENGTH_FILE))?,
        phonetics: read_json(&dir.join(PHONETICS_FILE))?,
        rhyme_groups: read_json(&dir.join(RHYME_GROUPS_FILE))?,
        definitions,
    };

    log::debug!(
        "loaded indices from {}: {} words, {} rhyme groups",
        dir.display(),
        indices.words_by_difficulty.len(),
        indices.rhyme_groups.len()
    );
    Ok(indices)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp_file = NamedTempFile::new_in(parent).map_err(|e| PersistError::io(path, e))?;

    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer(&mut writer, value).map_err(|e| PersistError::json(path, e))?;
        writer.flush().map_err(|e| PersistError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| PersistError::io(path, e.error))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| PersistError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DefinitionRecord, PhoneticRecord, WordRecord};
    use tempfile::tempdir;

    fn sample_indices() -> Indices {
        let words: Vec<WordRecord> = ["cat", "houses", "encyclopedia", "crane"]
            .iter()
            .filter_map(|w| WordRecord::new(w))
            .collect();
        let phonetics = [("cat", "K AE1 T"), ("hat", "HH AE1 T"), ("bat", "B AE1 T")]
            .iter()
            .filter_map(|(w, s)| PhoneticRecord::new(*w, s))
            .collect();
        let definitions = vec![DefinitionRecord {
            word: "cat".to_string(),
            definitions: vec!["A small feline.".to_string()],
            part_of_speech: Some("n".to_string()),
            pronunciation: Some("Cat".to_string()),
        }];
        Indices::build(&words, phonetics, definitions)
    }

    #[test]
    fn save_then_load_preserves_indices() {
        let dir = tempdir().unwrap();
        let indices = sample_indices();

        save_indices(dir.path(), &indices).unwrap();
        let loaded = load_indices(dir.path()).unwrap();

        assert_eq!(loaded, indices);
    }

    #[test]
    fn documents_use_expected_shapes() {
        let dir = tempdir().unwrap();
        save_indices(dir.path(), &sample_indices()).unwrap();

        let by_length = fs::read_to_string(dir.path().join(WORDS_BY_LENGTH_FILE)).unwrap();
        assert_eq!(by_length, r#"{"3":["cat"],"5":["crane"],"6":["houses"],"12":["encyclopedia"]}"#);

        let phonetics: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(PHONETICS_FILE)).unwrap())
                .unwrap();
        assert_eq!(phonetics[0]["phoneticTranscription"], "K AE1 T");
        assert_eq!(phonetics[0]["sounds"][1], "AE1");
    }

    #[test]
    fn missing_definitions_are_optional() {
        let dir = tempdir().unwrap();
        save_indices(dir.path(), &sample_indices()).unwrap();
        fs::remove_file(dir.path().join(DEFINITIONS_FILE)).unwrap();

        let loaded = load_indices(dir.path()).unwrap();
        assert!(loaded.definitions.is_empty());
        assert_eq!(loaded.words_by_difficulty.len(), 4);
    }

    #[test]
    fn missing_required_document_is_an_error() {
        let dir = tempdir().unwrap();
        save_indices(dir.path(), &sample_indices()).unwrap();
        fs::remove_file(dir.path().join(PHONETICS_FILE)).unwrap();

        let err = load_indices(dir.path()).unwrap_err();
        assert!(matches!(err, PersistError::Io { ref path, .. } if path.ends_with(PHONETICS_FILE)));
    }

    #[test]
    fn malformed_document_reports_json_error() {
        let dir = tempdir().unwrap();
        save_indices(dir.path(), &sample_indices()).unwrap();
        fs::write(dir.path().join(RHYME_GROUPS_FILE), "{not json").unwrap();

        let err = load_indices(dir.path()).unwrap_err();
        assert!(matches!(err, PersistError::Json { .. }));
    }

    #[test]
    fn save_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("v1");
        save_indices(&nested, &sample_indices()).unwrap();
        assert!(nested.join(WORDS_BY_DIFFICULTY_FILE).exists());
    }
}
