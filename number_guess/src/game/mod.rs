//! Guess-the-number session engine.
//!
//! This module provides the session state machine:
//! - Secret selection from an injected random source
//! - Guess evaluation with range checking
//! - Attempt counting and win/loss detection

pub mod models;
pub mod session;

pub use models::{GameState, Outcome};
pub use session::GuessGame;
