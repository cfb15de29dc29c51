//! Error types for configuration and guessing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration resolution
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Invalid game configuration. Raised before any session exists.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ConfigError {
    /// Lower bound is not strictly below the upper bound
    #[error("low must be < high (got low={low}, high={high})")]
    InvalidRange { low: i64, high: i64 },

    /// Attempt ceiling is zero or negative
    #[error("max_attempts must be a positive integer (got {0})")]
    NonPositiveAttempts(i64),

    /// Attempt ceiling does not fit the session counter
    #[error("max_attempts is too large (got {0}, limit {limit})", limit = u32::MAX)]
    TooManyAttempts(i64),
}

/// Result type for guesses
pub type GuessResult<T> = Result<T, GuessError>;

/// A guess the session refused to evaluate. Never consumes an attempt.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GuessError {
    #[error("guess {guess} is outside {low}..={high}")]
    OutOfRange { guess: i64, low: i64, high: i64 },
    #[error("game is already over")]
    GameOver,
}
