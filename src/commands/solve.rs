//! Word solving command
//!
//! Solves a specific secret word and returns the solution path.

use crate::core::{Feedback, Word};
use crate::error::SolveError;
use crate::solver::{ScoredWord, SessionState, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Stop after this many guesses; `None` runs until solved or exhausted
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    /// The candidate set ran out before the secret was found
    pub exhausted: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

impl SolveResult {
    /// The attempt log
    #[must_use]
    pub fn feedback_log(&self) -> Vec<Feedback> {
        self.guesses.iter().map(|step| step.feedback).collect()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: ScoredWord,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, recording every step
///
/// # Errors
///
/// Returns `SolveError::InvalidSecret` if the secret is not a 5-letter word.
/// Running out of candidates is reported through `SolveResult::exhausted`.
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, SolveError> {
    let secret = Word::new(&config.secret)?;
    let mut session = solver.session(secret);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while config.max_guesses.is_none_or(|max| guesses.len() < max) {
        // Score of the word about to be played, from the current snapshot
        let Some(score) = session
            .suggestion()
            .and_then(|word| session.scores().get(&word))
        else {
            break;
        };

        let Some(feedback) = session.step() else {
            break;
        };
        let Some(attempt) = session.attempts().last() else {
            break;
        };

        guesses.push(GuessStep {
            word: attempt.guess.text().to_string(),
            feedback,
            score,
            candidates_before: attempt.candidates_before,
            candidates_after: attempt.candidates_after,
        });

        if session.is_finished() {
            break;
        }
    }

    Ok(SolveResult {
        success: session.state() == SessionState::Solved,
        exhausted: session.state() == SessionState::Exhausted,
        guesses,
        secret: secret.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;
    use crate::wordlists::default_corpus;

    #[test]
    fn solve_word_succeeds() {
        let corpus = default_corpus();
        let solver = Solver::new(&corpus);

        let result = solve_word(SolveConfig::new("angle".to_string()), &solver).unwrap();

        assert!(result.success);
        assert!(!result.exhausted);
        assert_eq!(result.guesses.last().unwrap().word, "angle");
        assert!(result.feedback_log().last().unwrap().is_solved());
    }

    #[test]
    fn solve_records_history() {
        let corpus = default_corpus();
        let solver = Solver::new(&corpus);

        let result = solve_word(SolveConfig::new("crane".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.score.total() > 0);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let corpus = default_corpus();
        let solver = Solver::new(&corpus);

        let result = solve_word(SolveConfig::new("zz".to_string()), &solver);
        assert!(matches!(result, Err(SolveError::InvalidSecret(_))));
    }

    #[test]
    fn solve_secret_outside_corpus_exhausts() {
        let corpus = Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap();
        let solver = Solver::new(&corpus);

        let result = solve_word(SolveConfig::new("crane".to_string()), &solver).unwrap();
        assert!(!result.success);
        assert!(result.exhausted);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let corpus = Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap();
        let solver = Solver::new(&corpus);

        let mut config = SolveConfig::new("angle".to_string());
        config.max_guesses = Some(2);

        let result = solve_word(config, &solver).unwrap();
        assert_eq!(result.guesses.len(), 2);
        assert!(!result.success);
        assert!(!result.exhausted);
    }

    #[test]
    fn scenario_first_step_score() {
        let corpus = Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap();
        let solver = Solver::new(&corpus);

        let result = solve_word(SolveConfig::new("angle".to_string()), &solver).unwrap();
        let first = &result.guesses[0];
        assert_eq!(first.word, "ample");
        assert_eq!(first.score.total(), 44);
        assert_eq!(first.feedback.to_string(), "vxxvv");
    }
}
