//! Wordle Bot
//!
//! A heuristic Wordle solver. Words are ranked by how common their letters
//! are and how typical their letter positions are; each round plays the best
//! remaining candidate and prunes the rest with the feedback it gets back.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_bot::core::{Feedback, Word};
//! use wordle_bot::solver::Solver;
//! use wordle_bot::wordlists::default_corpus;
//!
//! // Score a guess against a secret
//! let secret = Word::new("angle").unwrap();
//! let guess = Word::new("ample").unwrap();
//! println!("{}", Feedback::compute(&secret, &guess));
//!
//! // Solve it automatically
//! let corpus = default_corpus();
//! let solution = Solver::new(&corpus).solve("angle").unwrap();
//! println!("Solved in {} guesses", solution.guess_count());
//! ```

// Core domain types
pub mod core;

// Errors and session configuration
pub mod config;
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
