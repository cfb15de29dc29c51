//! Internal modules for the guess-the-number client.
//!
//! This library provides line parsing and the interactive game loop
//! used by the ng_client binary.

pub mod commands;
pub mod shell;
