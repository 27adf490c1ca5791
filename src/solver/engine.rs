//! Main solver interface
//!
//! Drives sessions to completion, either picking the top-scoring word every
//! round or taking guesses from a [`GuessSource`].

use super::session::{Attempt, Session, SessionState};
use crate::config::SolverConfig;
use crate::core::{Corpus, Feedback, Word};
use crate::error::{GuessError, SessionError, SolveError};
use log::{debug, warn};
use std::io;

/// Supplies guesses to a running session
///
/// The automated solver uses [`TopScored`]; interactive front ends read from
/// a player instead.
pub trait GuessSource {
    /// Produce the next raw guess, or `None` to stop guessing
    ///
    /// # Errors
    /// Returns an I/O error if the guess could not be read.
    fn next_guess(&mut self, session: &Session) -> io::Result<Option<String>>;

    /// Called when a guess is refused; the same turn is then retried
    fn rejected(&mut self, _guess: &str, _error: &GuessError) {}
}

/// Always plays the session's top-scoring candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct TopScored;

impl GuessSource for TopScored {
    fn next_guess(&mut self, session: &Session) -> io::Result<Option<String>> {
        Ok(session.suggestion().map(|w| w.text().to_string()))
    }
}

/// A solved session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub secret: Word,
    pub attempts: Vec<Attempt>,
}

impl Solution {
    /// The attempt log; the last entry is always all-correct
    #[must_use]
    pub fn feedback_log(&self) -> Vec<Feedback> {
        self.attempts.iter().map(|a| a.feedback).collect()
    }

    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.attempts.iter().map(|a| a.guess).collect()
    }

    /// Number of guesses it took
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.attempts.len()
    }
}

/// Main Wordle solver
///
/// Holds a read-only corpus; every solve gets its own [`Session`].
pub struct Solver<'a> {
    corpus: &'a Corpus,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_config(corpus, SolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(corpus: &'a Corpus, config: SolverConfig) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Start a fresh session for `secret`
    #[must_use]
    pub fn session(&self, secret: Word) -> Session {
        Session::new(secret, self.corpus, self.config)
    }

    /// Solve automatically, always playing the top-scoring candidate
    ///
    /// # Errors
    /// - `InvalidSecret` if `secret` is not a 5-letter word
    /// - `SolveFailure` if the candidates run out first (the secret is not
    ///   in the corpus)
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::Corpus;
    /// use wordle_bot::solver::Solver;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap();
    /// let solution = Solver::new(&corpus).solve("angle").unwrap();
    ///
    /// assert_eq!(solution.feedback_log().last().unwrap().to_string(), "vvvvv");
    /// ```
    pub fn solve(&self, secret: &str) -> Result<Solution, SolveError> {
        self.solve_with(secret, &mut TopScored)
    }

    /// Solve with guesses taken from `source`
    ///
    /// Rejected guesses are reported back to the source and retried without
    /// costing an attempt.
    ///
    /// # Errors
    /// As [`solve`](Self::solve), plus `Aborted` when the source stops and
    /// `Input` when it fails to read.
    pub fn solve_with<G: GuessSource>(
        &self,
        secret: &str,
        source: &mut G,
    ) -> Result<Solution, SolveError> {
        let secret = Word::new(secret)?;
        let mut session = self.session(secret);

        loop {
            match session.state() {
                SessionState::Solved => {
                    debug!("Solved {secret} in {} attempts", session.attempts().len());
                    return Ok(Solution {
                        secret,
                        attempts: session.attempts().to_vec(),
                    });
                }
                SessionState::Exhausted => {
                    return Err(SolveError::SolveFailure {
                        secret,
                        attempts: session.attempts().len(),
                    });
                }
                SessionState::Guessing => {}
            }

            let Some(raw) = source.next_guess(&session)? else {
                return Err(SolveError::Aborted {
                    attempts: session.attempts().len(),
                });
            };

            match session.submit(&raw) {
                Ok(_) | Err(SessionError::Finished) => {}
                Err(SessionError::Guess(error)) => {
                    warn!("{error}");
                    source.rejected(&raw, &error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_corpus;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    const SCENARIO: &[&str] = &["apple", "angle", "ankle", "ample"];

    /// Replays scripted input and remembers rejections
    struct Scripted {
        inputs: VecDeque<&'static str>,
        rejected: Vec<GuessError>,
    }

    impl Scripted {
        fn new(inputs: &[&'static str]) -> Self {
            Self {
                inputs: inputs.iter().copied().collect(),
                rejected: Vec::new(),
            }
        }
    }

    impl GuessSource for Scripted {
        fn next_guess(&mut self, _session: &Session) -> io::Result<Option<String>> {
            Ok(self.inputs.pop_front().map(str::to_string))
        }

        fn rejected(&mut self, _guess: &str, error: &GuessError) {
            self.rejected.push(error.clone());
        }
    }

    #[test]
    fn scenario_solves_angle() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        let solution = Solver::new(&corpus).solve("angle").unwrap();

        assert_eq!(solution.guesses()[0].text(), "ample");
        assert_eq!(solution.guess_count(), 3);
        assert_eq!(
            solution.feedback_log().last().map(ToString::to_string),
            Some("vvvvv".to_string())
        );
    }

    #[test]
    fn secret_outside_corpus_fails() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        let result = Solver::new(&corpus).solve("crane");
        assert!(matches!(
            result,
            Err(SolveError::SolveFailure { attempts: 1, .. })
        ));
    }

    #[test]
    fn malformed_secret_is_rejected() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        assert!(matches!(
            Solver::new(&corpus).solve("ang"),
            Err(SolveError::InvalidSecret(_))
        ));
    }

    #[test]
    fn interactive_rejections_cost_nothing() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        let mut source = Scripted::new(&["oops", "crane", "ample", "apple", "angle"]);

        let solution = Solver::new(&corpus)
            .solve_with("angle", &mut source)
            .unwrap();

        let guesses: Vec<&str> = solution.attempts.iter().map(|a| a.guess.text()).collect();
        assert_eq!(guesses, ["ample", "angle"]);
        assert_eq!(
            source.rejected,
            [
                GuessError::InvalidGuessFormat("oops".to_string()),
                GuessError::NotInCandidateSet("crane".to_string()),
                GuessError::NotInCandidateSet("apple".to_string()),
            ]
        );
    }

    #[test]
    fn interactive_source_can_stop() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        let mut source = Scripted::new(&["ample"]);

        let result = Solver::new(&corpus).solve_with("angle", &mut source);
        assert!(matches!(result, Err(SolveError::Aborted { attempts: 1 })));
    }

    #[test]
    fn sessions_do_not_share_state() {
        let corpus = Corpus::from_strs(SCENARIO).unwrap();
        let solver = Solver::new(&corpus);

        let first = solver.solve("angle").unwrap();
        let second = solver.solve("angle").unwrap();
        assert_eq!(first, second);
        assert!(solver.solve("apple").is_ok());
    }

    #[test]
    fn every_dictionary_word_is_solvable() {
        let corpus = default_corpus();
        let solver = Solver::new(&corpus);

        for secret in corpus.iter().step_by(7) {
            let solution = solver.solve(secret.text()).unwrap();
            assert!(solution.guess_count() <= corpus.len());
            assert_eq!(solution.guesses().last(), Some(secret));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn solving_terminates_and_shrinks(index in 0usize..4096) {
            let corpus = default_corpus();
            let secret = corpus.words()[index % corpus.len()];
            let solution = Solver::new(&corpus).solve(secret.text()).unwrap();

            prop_assert!(solution.guess_count() <= corpus.len());
            prop_assert_eq!(solution.secret, secret);
            for attempt in &solution.attempts {
                prop_assert!(attempt.candidates_after <= attempt.candidates_before);
            }
            for pair in solution.attempts.windows(2) {
                prop_assert!(pair[1].candidates_before == pair[0].candidates_after);
            }
        }
    }
}
