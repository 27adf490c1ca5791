//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, letter sets,
//! feedback codes and the solving corpus. Everything here is pure and has
//! no knowledge of the solving strategy.

mod corpus;
mod feedback;
mod letters;
mod word;

pub use corpus::Corpus;
pub use feedback::{Feedback, Mark};
pub use letters::LetterSet;
pub use word::{Word, WordError};

/// Number of letters in every word the solver handles
pub const WORD_LENGTH: usize = 5;
