//! Wordplay
//!
//! Dictionary ingestion, indexing and a Wordle engine for word games.
//!
//! Raw corpora (a word list, a phonetic dictionary and a prose dictionary)
//! are parsed into records, folded into indices, and served through an
//! immutable [`dictionary::DictionaryStore`].
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::corpus::parse_word_list;
//! use wordplay::dictionary::DictionaryStore;
//! use wordplay::game::{GameConfig, GameStatus, WordleGame};
//!
//! let words = parse_word_list("crane\nslate\nCAT\n");
//! let store = DictionaryStore::from_corpora(&words.records, Vec::new(), Vec::new());
//! assert!(store.is_valid("cat"));
//!
//! let mut game = WordleGame::with_target(&store, GameConfig::default(), "slate");
//! game.submit("crane").unwrap();
//! game.submit("slate").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain records
pub mod core;

// Raw corpus parsers
pub mod corpus;

// Derived indices
pub mod index;

// Query layer
pub mod dictionary;

// Wordle engine
pub mod game;

// JSON persistence of indices
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
