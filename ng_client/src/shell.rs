//! Line-oriented game loop.
//!
//! The loop owns all prompting and printing; every game rule lives in
//! [`GuessGame`]. Input and output are generic so the loop can be driven by
//! stdin/stdout or by in-memory buffers.

use log::debug;
use number_guess::{Difficulty, GuessError, GuessGame, Outcome};
use std::io::{self, BufRead, Write};

use crate::commands::{Command, parse_command};

/// How the interactive loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won { attempts: u32 },
    Lost { secret: i64 },
    /// Quit token or end of input.
    Quit,
}

/// Print the opening line for a session.
pub fn write_banner<W: Write>(
    game: &GuessGame,
    difficulty: Difficulty,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "Guess the number between {} and {} (difficulty: {}, max attempts: {})",
        game.low(),
        game.high(),
        difficulty,
        game.max_attempts()
    )
}

/// Prompt for guesses until the session ends or the player quits.
///
/// Malformed and out-of-range lines are answered with a re-prompt and never
/// reach an attempt.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned.
pub fn play<R: BufRead, W: Write>(
    game: &mut GuessGame,
    mut input: R,
    mut output: W,
) -> io::Result<Ending> {
    let mut line = Vec::new();

    while !game.is_over() {
        write!(
            output,
            "[Attempts {}/{} | {} remaining] Your guess (or 'q' to quit): ",
            game.attempts() + 1,
            game.max_attempts(),
            game.remaining()
        )?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("input closed");
            writeln!(output, "\nGoodbye.")?;
            return Ok(Ending::Quit);
        }

        // Invalid UTF-8 falls through to the not-a-number re-prompt
        let n = match parse_command(&String::from_utf8_lossy(&line)) {
            Ok(Command::Quit) => {
                writeln!(output, "Goodbye.")?;
                return Ok(Ending::Quit);
            }
            Ok(Command::Guess(n)) => n,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match game.guess(n) {
            Ok(Outcome::Correct) => {
                writeln!(
                    output,
                    "🎉 Correct! You found it in {} attempts.",
                    game.attempts()
                )?;
                return Ok(Ending::Won {
                    attempts: game.attempts(),
                });
            }
            Ok(hint) => writeln!(output, "{hint}")?,
            Err(GuessError::OutOfRange { low, high, .. }) => {
                writeln!(output, "Please enter a number between {low} and {high}.")?;
            }
            // The loop condition re-checks termination before every prompt
            Err(GuessError::GameOver) => break,
        }
    }

    writeln!(output, "Game over: the number was {}.", game.secret())?;
    Ok(Ending::Lost {
        secret: game.secret(),
    })
}
