//! Hard-mode constraint check

use super::{LetterState, ScoredRow};
use thiserror::Error;

/// First revealed hint a hard-mode guess fails to honour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// `position` is 1-based
    #[error("{position} letter must be {}", letter.to_ascii_uppercase())]
    MissingCorrect { position: usize, letter: char },

    #[error("Guess must contain {}", letter.to_ascii_uppercase())]
    MissingPresent { letter: char },
}

/// Check `guess` against every earlier row
///
/// Rows are scanned oldest first and positions left to right; the first
/// violation found is returned.
///
/// # Errors
/// Returns the first [`HardModeViolation`] found.
///
/// # Examples
/// ```
/// use wordplay::game::{HardModeViolation, ScoredRow, check_hard_mode};
///
/// let rows = vec![ScoredRow::score("spade", "stare").unwrap()];
///
/// let err = check_hard_mode(&rows, "crane").unwrap_err();
/// assert_eq!(err, HardModeViolation::MissingCorrect { position: 1, letter: 's' });
/// assert_eq!(err.to_string(), "1 letter must be S");
///
/// assert!(check_hard_mode(&rows, "shade").is_ok());
/// ```
pub fn check_hard_mode(rows: &[ScoredRow], guess: &str) -> Result<(), HardModeViolation> {
    let guess_letters: Vec<char> = guess.chars().collect();

    for row in rows {
        for (index, (letter, state)) in row.letters().enumerate() {
            match state {
                LetterState::Correct if guess_letters.get(index) != Some(&letter) => {
                    return Err(HardModeViolation::MissingCorrect {
                        position: index + 1,
                        letter,
                    });
                }
                LetterState::Present if !guess_letters.contains(&letter) => {
                    return Err(HardModeViolation::MissingPresent { letter });
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(target: &str, guesses: &[&str]) -> Vec<ScoredRow> {
        guesses
            .iter()
            .map(|guess| ScoredRow::score(target, guess).unwrap())
            .collect()
    }

    #[test]
    fn no_rows_no_constraints() {
        assert!(check_hard_mode(&[], "zzzzz").is_ok());
    }

    #[test]
    fn correct_letter_must_stay_in_place() {
        let history = rows("sheep", &["salty"]);
        let err = check_hard_mode(&history, "tasks").unwrap_err();
        assert_eq!(err, HardModeViolation::MissingCorrect { position: 1, letter: 's' });
        assert_eq!(err.to_string(), "1 letter must be S");
    }

    #[test]
    fn present_letter_must_appear() {
        // R is present in "crane" against "rider"
        let history = rows("rider", &["crane"]);
        let err = check_hard_mode(&history, "moist").unwrap_err();
        assert_eq!(err, HardModeViolation::MissingPresent { letter: 'r' });
        assert_eq!(err.to_string(), "Guess must contain R");

        assert!(check_hard_mode(&history, "ruder").is_ok());
    }

    #[test]
    fn first_violation_wins() {
        // Row 1 reveals S correct at 1 and E present; both are violated
        let history = rows("sheep", &["solve"]);
        let err = check_hard_mode(&history, "brink").unwrap_err();
        assert_eq!(err.to_string(), "1 letter must be S");
    }

    #[test]
    fn earlier_rows_checked_first() {
        let history = rows("pride", &["adieu", "tripe"]);
        // Row 1: A absent, D present, I correct at 3, E present, U absent
        // Row 2: R correct at 2, I correct at 3, P present, E correct at 5
        let err = check_hard_mode(&history, "grime").unwrap_err();
        assert_eq!(err, HardModeViolation::MissingPresent { letter: 'd' });
    }

    #[test]
    fn absent_letters_are_not_constraints() {
        let history = rows("sheep", &["bully"]);
        assert!(check_hard_mode(&history, "bully").is_ok());
    }
}
