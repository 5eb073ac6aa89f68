//! Interactive Wordle in the terminal
//!
//! Text-based game loop over any line reader and writer, so the loop can be
//! driven from stdin or from a script.

use crate::game::{GameResult, GameStatus, WordleGame};
use crate::output::formatters::{format_keyboard, format_row};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play `game` until it ends or the player quits
///
/// Returns `None` if the player quit or input ran out before the game ended.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<R: BufRead, W: Write>(
    game: &mut WordleGame<'_>,
    mut input: R,
    mut output: W,
) -> io::Result<Option<GameResult>> {
    let config = *game.config();
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                          Wordplay                            ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the {}-letter word in {} tries{}.",
        config.word_length,
        config.max_guesses,
        if config.hard_mode { " (hard mode)" } else { "" }
    )?;
    writeln!(output, "Commands: 'quit' to exit, 'keys' to show letter hints\n")?;

    while !game.is_over() {
        let turn = game.rows().len() + 1;
        let Some(line) = prompt(&mut input, &mut output, &format!("Guess {turn}"))? else {
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\nThe word was {}.", game.target().to_uppercase().bold())?;
                return Ok(None);
            }
            "keys" | "k" => {
                writeln!(output, "{}", format_keyboard(game.hints()))?;
            }
            guess => match game.submit(guess) {
                Ok(row) => writeln!(output, "  {}", format_row(row))?,
                Err(rejection) => writeln!(output, "  ❌ {rejection}")?,
            },
        }
    }

    let result = game.result();
    match game.status() {
        GameStatus::Won => writeln!(
            output,
            "\n{}",
            format!("🎉 Solved in {} guesses!", game.rows().len())
                .green()
                .bold()
        )?,
        _ => writeln!(
            output,
            "\n{} The word was {}.",
            "Out of guesses.".red().bold(),
            result.target.to_uppercase().bold()
        )?,
    }

    Ok(Some(result))
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
