//! Interactive TUI play mode
//!
//! The player guesses against a secret while the board shows the solver's
//! remaining candidates and constraints.

pub mod app;
mod rendering;

pub use app::{App, AppMode, Statistics, random_secret, run_tui};
