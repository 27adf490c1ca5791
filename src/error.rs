//! Errors surfaced by the solving engine and its collaborators

use crate::core::{Word, WordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A guess was refused at the guessing boundary
///
/// Rejections never change the session state or cost an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid word \"{0}\": guesses must be exactly 5 letters")]
    InvalidGuessFormat(String),

    #[error("\"{0}\" is not a remaining candidate word")]
    NotInCandidateSet(String),

    #[error("\"{guess}\" uses the forbidden letter '{letter}'")]
    ForbiddenLetterUsed { guess: String, letter: char },
}

/// Errors from driving a single session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("the session has already finished")]
    Finished,
}

/// Terminal outcomes of a solve that did not reach the secret
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid secret word")]
    InvalidSecret(#[from] WordError),

    #[error("ran out of candidates for {secret} after {attempts} attempts")]
    SolveFailure { secret: Word, attempts: usize },

    #[error("guessing stopped after {attempts} attempts")]
    Aborted { attempts: usize },

    #[error("could not read guess input")]
    Input(#[from] io::Error),
}

/// Failures loading a corpus; these abort session initialization
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid word \"{word}\" on line {line} of {path}")]
    InvalidWord {
        path: PathBuf,
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },

    #[error("word list {0} contains no words")]
    Empty(PathBuf),
}
