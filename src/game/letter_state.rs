//! Per-letter feedback states and keyboard hints

use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one letter
///
/// Ordered by strength, so the best state seen for a letter is the maximum
/// of every state it has received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Combine two observations of the same letter, keeping the stronger one
    ///
    /// # Examples
    /// ```
    /// use wordplay::game::LetterState;
    ///
    /// assert_eq!(LetterState::Correct.merge(LetterState::Absent), LetterState::Correct);
    /// assert_eq!(LetterState::Absent.merge(LetterState::Present), LetterState::Present);
    /// assert_eq!(LetterState::Unused.merge(LetterState::Absent), LetterState::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Share-grid square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unused => '⬜',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unused => "unused",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best state seen for each letter across a game
///
/// Letters that were never guessed report [`LetterState::Unused`]. A letter
/// that has been seen `Correct` anywhere never drops back, regardless of the
/// order rows are recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &str, states: &[LetterState]) {
        for (letter, &state) in guess.chars().zip(states) {
            let best = self.states.entry(letter).or_default();
            *best = best.merge(state);
        }
    }

    #[must_use]
    pub fn state_of(&self, letter: char) -> LetterState {
        self.states.get(&letter).copied().unwrap_or_default()
    }

    /// Letters with a known state, alphabetically
    #[must_use]
    pub fn known(&self) -> Vec<(char, LetterState)> {
        let mut known: Vec<(char, LetterState)> = self
            .states
            .iter()
            .filter(|&(_, &state)| state != LetterState::Unused)
            .map(|(&letter, &state)| (letter, state))
            .collect();
        known.sort_unstable_by_key(|&(letter, _)| letter);
        known
    }
}
