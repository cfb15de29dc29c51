//! # Number Guess
//!
//! A guess-the-number game engine built around a small finite state machine.
//!
//! A session picks a secret integer in a configured range and evaluates
//! guesses until the player finds it or runs out of attempts:
//!
//! - **Active**: accepting guesses, answering `low`/`high` hints
//! - **Won**: the last evaluated guess was correct
//! - **Lost**: the attempt ceiling was reached without a correct guess
//!
//! ## Core Modules
//!
//! - [`config`]: Difficulty presets and range/attempts resolution
//! - [`game`]: Session state machine, outcomes, and states
//! - [`errors`]: Configuration and guess errors
//!
//! ## Example
//!
//! ```
//! use number_guess::{GuessGame, Outcome, config::resolve};
//!
//! let config = resolve("easy", None, None, None).unwrap();
//! let mut game = GuessGame::with_seed(config, 7);
//!
//! match game.guess(5).unwrap() {
//!     Outcome::Correct => assert!(game.is_over()),
//!     Outcome::Low | Outcome::High => assert_eq!(game.remaining(), 4),
//! }
//! ```

/// Difficulty presets and configuration resolution.
pub mod config;
pub use config::{Difficulty, GameConfig, UnknownDifficulty, resolve, resolve_preset};

/// Error types.
pub mod errors;
pub use errors::{ConfigError, ConfigResult, GuessError, GuessResult};

/// Session state machine.
pub mod game;
pub use game::{GameState, GuessGame, Outcome};
