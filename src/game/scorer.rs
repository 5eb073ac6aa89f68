//! Guess scoring
//!
//! Classifies each letter of a guess against the target word using the
//! standard two-pass rules:
//! 1. Mark every exact position match `Correct` and consume it from the
//!    target's letter pool
//! 2. Left to right, mark remaining letters `Present` while the pool still
//!    holds that letter, otherwise `Absent`
//!
//! Finishing pass 1 before pass 2 starts is what keeps repeated letters from
//! being over-reported as present.

use super::LetterState;
use crate::core::LetterCounts;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { target: usize, guess: usize },
}

/// A submitted guess with its per-position feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    pub word: String,
    pub states: Vec<LetterState>,
}

impl ScoredRow {
    /// Score `guess` against `target` and keep both
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the words differ in length.
    pub fn score(target: &str, guess: &str) -> Result<Self, ScoreError> {
        Ok(Self {
            states: score_guess(target, guess)?,
            word: guess.to_string(),
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&state| state == LetterState::Correct)
    }

    /// The row as share-grid squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states.iter().map(|state| state.emoji()).collect()
    }

    /// Letters paired with their feedback, left to right
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.word.chars().zip(self.states.iter().copied())
    }
}

/// Classify every letter of `guess` against `target`
///
/// Letters are compared as given; callers lowercase both words first.
///
/// # Errors
/// Returns [`ScoreError::LengthMismatch`] if the words differ in length.
///
/// # Examples
/// ```
/// use wordplay::game::{LetterState, score_guess};
/// use LetterState::{Absent, Correct};
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// let states = score_guess("slate", "crane").unwrap();
/// assert_eq!(states, [Absent, Absent, Correct, Absent, Correct]);
/// ```
pub fn score_guess(target: &str, guess: &str) -> Result<Vec<LetterState>, ScoreError> {
    let mut remaining = LetterCounts::of(target);
    let target: Vec<char> = target.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    if target.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }

    let mut states = vec![LetterState::Absent; guess.len()];

    // First pass: exact matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            states[i] = LetterState::Correct;
            remaining.take(g);
        }
    }

    // Second pass: present letters from what is left of the pool
    for (state, &letter) in states.iter_mut().zip(&guess) {
        if *state != LetterState::Correct && remaining.take(letter) {
            *state = LetterState::Present;
        }
    }

    Ok(states)
}
