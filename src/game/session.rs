//! A single Wordle game
//!
//! [`WordleGame`] borrows a [`DictionaryStore`] for target selection and
//! guess validation and owns all per-game state. Concurrent games each own
//! their own instance.

use super::{HardModeViolation, KeyboardHints, ScoredRow, check_hard_mode};
use crate::core::Difficulty;
use crate::dictionary::DictionaryStore;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Letters counted as common when grading a target word
const COMMON_LETTERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'r', 's', 't', 'l', 'n'];

/// Points available before guess and time penalties
const BASE_SCORE: u64 = 1000;
const GUESS_PENALTY: u64 = 100;
const SECOND_PENALTY: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub hard_mode: bool,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            hard_mode: false,
            difficulty: Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a guess was refused; the game is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Game is not active")]
    GameOver,

    #[error("Word must be {expected} letters long")]
    WrongLength { expected: usize, actual: usize },

    #[error("Not a valid word")]
    NotInDictionary,

    #[error(transparent)]
    HardMode(#[from] HardModeViolation),
}

#[derive(Debug, Error)]
pub enum GameSetupError {
    #[error("dictionary has no {length}-letter words to choose a target from")]
    NoTargetWords { length: usize },
}

/// Summary of a game, available at any point but final once it is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub target: String,
    pub guesses: usize,
    /// Number of guesses taken, if the game was won
    pub solved_in: Option<usize>,
    pub hard_mode: bool,
    pub elapsed: Duration,
    pub score: u64,
    pub pattern: String,
}

/// Game state after the given rows have been played
///
/// Won as soon as the latest row equals the target, lost once `max_guesses`
/// rows have been played without a win.
#[must_use]
pub fn completion(rows: &[ScoredRow], target: &str, max_guesses: usize) -> GameStatus {
    match rows.last() {
        Some(row) if row.word == target => GameStatus::Won,
        _ if rows.len() >= max_guesses => GameStatus::Lost,
        _ => GameStatus::Playing,
    }
}

/// Grade a candidate target by its share of common letters
///
/// Above 60% common letters is easy, above 40% is medium, anything else hard.
///
/// # Examples
/// ```
/// use wordplay::core::Difficulty;
/// use wordplay::game::target_difficulty;
///
/// assert_eq!(target_difficulty("arise"), Difficulty::Easy);
/// assert_eq!(target_difficulty("proud"), Difficulty::Medium);
/// assert_eq!(target_difficulty("fuzzy"), Difficulty::Hard);
/// ```
#[must_use]
pub fn target_difficulty(word: &str) -> Difficulty {
    let total = word.chars().count();
    if total == 0 {
        return Difficulty::Hard;
    }
    let common = word.chars().filter(|c| COMMON_LETTERS.contains(c)).count();
    let ratio = common as f64 / total as f64;

    if ratio > 0.6 {
        Difficulty::Easy
    } else if ratio > 0.4 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Score for a win after `rows` guesses and `elapsed_secs` seconds, floored at zero
#[must_use]
pub fn win_score(rows: usize, elapsed_secs: u64) -> u64 {
    BASE_SCORE
        .saturating_sub(rows as u64 * GUESS_PENALTY)
        .saturating_sub(elapsed_secs.saturating_mul(SECOND_PENALTY))
}

#[derive(Debug)]
pub struct WordleGame<'a> {
    dictionary: &'a DictionaryStore,
    config: GameConfig,
    target: String,
    rows: Vec<ScoredRow>,
    hints: KeyboardHints,
    status: GameStatus,
    started: Instant,
    finished: Option<Instant>,
}

impl<'a> WordleGame<'a> {
    /// Start a game with a random target of the configured length
    ///
    /// Prefers words whose common-letter grade matches the configured
    /// difficulty and falls back to any word of the right length.
    ///
    /// # Errors
    /// Returns [`GameSetupError::NoTargetWords`] if the dictionary has no
    /// words of the configured length.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a DictionaryStore,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameSetupError> {
        let pool = dictionary.by_length(config.word_length);
        let matching: Vec<&String> = pool
            .iter()
            .filter(|word| target_difficulty(word) == config.difficulty)
            .collect();

        if matching.is_empty() {
            log::debug!(
                "no {} {}-letter targets, choosing from every word of that length",
                config.difficulty,
                config.word_length
            );
        }

        let target = matching
            .choose(rng)
            .copied()
            .or_else(|| pool.choose(rng))
            .ok_or(GameSetupError::NoTargetWords {
                length: config.word_length,
            })?;

        Ok(Self::with_target(dictionary, config, target))
    }

    /// Start a game with a known target
    ///
    /// The configured word length is replaced by the target's length.
    #[must_use]
    pub fn with_target(dictionary: &'a DictionaryStore, config: GameConfig, target: &str) -> Self {
        let target = target.trim().to_lowercase();
        let config = GameConfig {
            word_length: target.chars().count(),
            ..config
        };

        Self {
            dictionary,
            config,
            target,
            rows: Vec::with_capacity(config.max_guesses),
            hints: KeyboardHints::new(),
            status: GameStatus::Playing,
            started: Instant::now(),
            finished: None,
        }
    }

    /// Play one guess
    ///
    /// # Errors
    /// Returns a [`GuessRejection`] if the game is over, the guess has the wrong
    /// length, is not in the dictionary, or breaks a hard-mode constraint. A
    /// rejected guess does not use up a row.
    pub fn submit(&mut self, guess: &str) -> Result<&ScoredRow, GuessRejection> {
        if self.status != GameStatus::Playing {
            return Err(GuessRejection::GameOver);
        }

        let guess = guess.trim().to_lowercase();
        let length = guess.chars().count();
        if length != self.config.word_length {
            return Err(GuessRejection::WrongLength {
                expected: self.config.word_length,
                actual: length,
            });
        }

        if !self.dictionary.is_valid(&guess) {
            return Err(GuessRejection::NotInDictionary);
        }

        if self.config.hard_mode {
            check_hard_mode(&self.rows, &guess)?;
        }

        let row = ScoredRow::score(&self.target, &guess).map_err(|_| {
            GuessRejection::WrongLength {
                expected: self.config.word_length,
                actual: length,
            }
        })?;

        self.hints.record(&row.word, &row.states);
        self.rows.push(row);
        self.status = completion(&self.rows, &self.target, self.config.max_guesses);

        if self.status != GameStatus::Playing {
            self.finished = Some(Instant::now());
            log::debug!(
                "game over after {} guesses: {:?}",
                self.rows.len(),
                self.status
            );
        }

        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Share grid: one line of squares per played row
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    /// use wordplay::dictionary::DictionaryStore;
    /// use wordplay::game::{GameConfig, WordleGame};
    ///
    /// let words: Vec<WordRecord> = ["slate", "crane"].iter().filter_map(|w| WordRecord::new(w)).collect();
    /// let store = DictionaryStore::from_corpora(&words, Vec::new(), Vec::new());
    /// let mut game = WordleGame::with_target(&store, GameConfig::default(), "slate");
    ///
    /// game.submit("crane").unwrap();
    /// game.submit("slate").unwrap();
    /// assert_eq!(game.share_pattern(), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_pattern(&self) -> String {
        self.rows
            .iter()
            .map(ScoredRow::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        let elapsed = self
            .finished
            .map_or(Duration::ZERO, |end| end.duration_since(self.started));
        let won = self.status == GameStatus::Won;

        GameResult {
            target: self.target.clone(),
            guesses: self.rows.len(),
            solved_in: won.then_some(self.rows.len()),
            hard_mode: self.config.hard_mode,
            elapsed,
            score: if won {
                win_score(self.rows.len(), elapsed.as_secs())
            } else {
                0
            },
            pattern: self.share_pattern(),
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.rows.len())
    }

    /// The word being guessed
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}
