//! Guess outcomes and session states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one in-range guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    /// Guess is below the secret
    Low,
    /// Guess is above the secret
    High,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "Correct!"),
            Outcome::Low => write!(f, "Too low."),
            Outcome::High => write!(f, "Too high."),
        }
    }
}

/// Session lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Active => write!(f, "active"),
            GameState::Won => write!(f, "won"),
            GameState::Lost => write!(f, "lost"),
        }
    }
}
