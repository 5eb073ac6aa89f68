//! Formatting utilities for terminal output

use crate::game::{KeyboardHints, LetterState, ScoredRow};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Unused => text.normal(),
    }
}

/// A scored guess as tiles followed by its share squares
#[must_use]
pub fn format_row(row: &ScoredRow) -> String {
    let tiles: String = row
        .letters()
        .map(|(letter, state)| letter_tile(letter, state).to_string())
        .collect();
    format!("{tiles}  {}", row.to_emoji())
}

/// QWERTY keyboard colored by the best state of each letter
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, keys)| {
            let tiles: String = keys
                .chars()
                .map(|key| letter_tile(key, hints.state_of(key)).to_string())
                .collect();
            format!("{}{tiles}", " ".repeat(indent * 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `count` in `total` as a percentage
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
