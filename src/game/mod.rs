//! Wordle game engine
//!
//! Scoring, hard-mode checks and completion are free functions over
//! [`ScoredRow`] slices so they can be tested without a dictionary.
//! [`WordleGame`] ties them together for a single game.

mod hard_mode;
mod letter_state;
mod scorer;
mod session;

pub use hard_mode::{HardModeViolation, check_hard_mode};
pub use letter_state::{KeyboardHints, LetterState};
pub use scorer::{ScoreError, ScoredRow, score_guess};
pub use session::{
    DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig, GameResult, GameSetupError, GameStatus,
    GuessRejection, WordleGame, completion, target_difficulty, win_score,
};
