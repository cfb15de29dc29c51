//! A single guess-the-number session.

use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cmp::Ordering;

use super::models::{GameState, Outcome};
use crate::{
    config::GameConfig,
    errors::{GuessError, GuessResult},
};

/// One game from secret selection to termination.
///
/// The secret is drawn once at construction from the random source handed to
/// the constructor; the session never touches a global generator. State is
/// only mutated by [`GuessGame::guess`].
///
/// ```
/// use number_guess::{GameConfig, GuessGame, Outcome};
///
/// let config = GameConfig::new(1, 10, 3).unwrap();
/// let mut game = GuessGame::with_seed(config, 42);
///
/// let secret = game.secret();
/// assert_eq!(game.guess(secret), Ok(Outcome::Correct));
/// assert!(game.is_over());
/// ```
#[derive(Debug, Clone)]
pub struct GuessGame {
    config: GameConfig,
    secret: i64,
    attempts: u32,
    won: bool,
}

impl GuessGame {
    /// Start a session with an OS-seeded generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, &mut StdRng::from_os_rng())
    }

    /// Start a session whose secret is reproducible for a given seed and range.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Start a session drawing the secret from a caller-owned generator.
    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let secret = rng.random_range(config.low()..=config.high());
        debug!(
            "new game: range {}..={}, {} attempts",
            config.low(),
            config.high(),
            config.max_attempts()
        );
        trace!("secret is {secret}");

        Self {
            config,
            secret,
            attempts: 0,
            won: false,
        }
    }

    /// Evaluate a guess.
    ///
    /// # Errors
    ///
    /// * [`GuessError::GameOver`] if the session already ended
    /// * [`GuessError::OutOfRange`] if `n` is outside `[low, high]`
    ///
    /// Neither error consumes an attempt.
    pub fn guess(&mut self, n: i64) -> GuessResult<Outcome> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        if !self.config.contains(n) {
            return Err(GuessError::OutOfRange {
                guess: n,
                low: self.config.low(),
                high: self.config.high(),
            });
        }

        self.attempts += 1;
        let outcome = match n.cmp(&self.secret) {
            Ordering::Equal => {
                self.won = true;
                Outcome::Correct
            }
            Ordering::Less => Outcome::Low,
            Ordering::Greater => Outcome::High,
        };

        debug!(
            "guess {n} -> {outcome:?} (attempt {}/{})",
            self.attempts,
            self.config.max_attempts()
        );
        match self.state() {
            GameState::Won => info!("game won in {} attempts", self.attempts),
            GameState::Lost => info!("game lost after {} attempts", self.attempts),
            GameState::Active => {}
        }

        Ok(outcome)
    }

    /// Whether the session has reached a terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.attempts >= self.config.max_attempts()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else if self.attempts >= self.config.max_attempts() {
            GameState::Lost
        } else {
            GameState::Active
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn low(&self) -> i64 {
        self.config.low()
    }

    #[must_use]
    pub const fn high(&self) -> i64 {
        self.config.high()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.config.max_attempts()
    }

    /// Number of evaluated guesses so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts left before the session is lost.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.config.max_attempts().saturating_sub(self.attempts)
    }

    /// The secret. Hiding it until the end is up to the caller.
    #[must_use]
    pub const fn secret(&self) -> i64 {
        self.secret
    }
}
