//! Session configuration
//!
//! Everything a session needs beyond its corpus and secret is passed in
//! explicitly; there is no process-wide solver state.

use crate::core::LetterSet;

/// Configuration handed to every session a [`Solver`](crate::solver::Solver) creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters a word may use before any feedback arrives
    pub alphabet: LetterSet,
    /// Trace constraint state and the ranked candidate list every round
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            alphabet: LetterSet::ALPHABET,
            verbose: false,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn alphabet(mut self, alphabet: LetterSet) -> Self {
        self.alphabet = alphabet;
        self
    }
}
