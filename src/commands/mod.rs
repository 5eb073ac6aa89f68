//! Command implementations

pub mod play;
pub mod process;
pub mod query;

pub use play::play_game;
pub use process::{
    CorpusReport, ParsedSources, ProcessError, ProcessReport, parse_sources, run_process,
};
pub use query::{
    WordReport, check_word, define_word, find_anagrams, find_rhymes, open_dictionary,
    pick_rhyme_group, sample_words, word_search_words,
};
