//! One solving session against a single secret
//!
//! A session owns its candidate list, score snapshot, constraints and
//! attempt log. Nothing is shared with other sessions, so any number of them
//! can run side by side over the same corpus.

use super::constraints::{Constraints, truncate};
use super::scorer::{ScoreMap, build_scores};
use crate::config::SolverConfig;
use crate::core::{Corpus, Feedback, Word};
use crate::error::{GuessError, SessionError};
use log::{debug, trace};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next guess
    Guessing,
    /// The secret was guessed
    Solved,
    /// No candidates remain, so no further valid guess exists
    Exhausted,
}

/// A single evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State machine for one secret
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    config: SolverConfig,
    candidates: Vec<Word>,
    scores: ScoreMap,
    constraints: Constraints,
    attempts: Vec<Attempt>,
    state: SessionState,
}

impl Session {
    /// Start a session on a private copy of `corpus`
    ///
    /// Words using letters outside the configured alphabet are dropped up front.
    #[must_use]
    pub fn new(secret: Word, corpus: &Corpus, config: SolverConfig) -> Self {
        let constraints = Constraints::new(config.alphabet);
        let mut candidates = corpus.words().to_vec();
        truncate(&mut candidates, &constraints);

        let mut session = Self {
            secret,
            config,
            scores: build_scores(&candidates),
            candidates,
            constraints,
            attempts: Vec::new(),
            state: SessionState::Guessing,
        };
        session.check_exhausted();
        session
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != SessionState::Guessing
    }

    /// Remaining candidates, in corpus order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Scores for the current candidate snapshot
    #[must_use]
    pub const fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The attempt log: one feedback code per evaluated guess
    #[must_use]
    pub fn feedback_log(&self) -> Vec<Feedback> {
        self.attempts.iter().map(|a| a.feedback).collect()
    }

    /// The top-scoring remaining candidate
    #[must_use]
    pub fn suggestion(&self) -> Option<Word> {
        self.scores.best(&self.candidates).copied()
    }

    /// Check a raw guess without touching any state
    ///
    /// # Errors
    /// - `InvalidGuessFormat` unless the input is exactly 5 ASCII letters
    /// - `NotInCandidateSet` if the word is not a remaining candidate
    /// - `ForbiddenLetterUsed` if it uses a letter proven absent
    pub fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        let raw = raw.trim();
        let guess = Word::new(raw).map_err(|_| GuessError::InvalidGuessFormat(raw.to_string()))?;

        if !self.candidates.contains(&guess) {
            return Err(GuessError::NotInCandidateSet(guess.text().to_string()));
        }

        self.constraints.check_guess(&guess)?;
        Ok(guess)
    }

    /// Validate and evaluate an externally supplied guess
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is over, or the
    /// validation error; neither changes the session.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        let guess = self.validate(raw)?;
        Ok(self.evaluate(guess))
    }

    /// Play the suggested guess
    ///
    /// Returns `None` once the session is finished.
    pub fn step(&mut self) -> Option<Feedback> {
        if self.is_finished() {
            return None;
        }
        let guess = self.suggestion()?;
        Some(self.evaluate(guess))
    }

    fn evaluate(&mut self, guess: Word) -> Feedback {
        let feedback = Feedback::compute(&self.secret, &guess);
        let candidates_before = self.candidates.len();
        debug!("Guess {guess}: {feedback}");

        if feedback.is_solved() {
            self.state = SessionState::Solved;
            self.attempts.push(Attempt {
                guess,
                feedback,
                candidates_before,
                candidates_after: candidates_before,
            });
            debug!(
                "Guessed {} after {} attempts.",
                self.secret,
                self.attempts.len()
            );
            return feedback;
        }

        self.constraints.record(&guess, &feedback);
        let removed = truncate(&mut self.candidates, &self.constraints);
        self.scores = build_scores(&self.candidates);

        debug!(
            "Removed {removed} candidates, {} remain",
            self.candidates.len()
        );
        if self.config.verbose {
            trace!("{}", self.constraints);
        }

        self.attempts.push(Attempt {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
        self.check_exhausted();

        feedback
    }

    fn check_exhausted(&mut self) {
        if self.candidates.is_empty() {
            self.state = SessionState::Exhausted;
            debug!("No candidates remain for {}", self.secret);
            return;
        }

        if let Some(top) = self.suggestion() {
            debug!("Dictionary top word: {top}");
        }
        if self.config.verbose {
            let ranked: Vec<String> = self
                .scores
                .ranked(&self.candidates)
                .iter()
                .map(|w| format!("{w}={}", self.scores.total(w)))
                .collect();
            trace!("Ranked candidates: {}", ranked.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn corpus(list: &[&str]) -> Corpus {
        Corpus::from_strs(list).unwrap()
    }

    fn session(secret: &str, list: &[&str]) -> Session {
        Session::new(
            Word::new(secret).unwrap(),
            &corpus(list),
            SolverConfig::default(),
        )
    }

    const SCENARIO: &[&str] = &["apple", "angle", "ankle", "ample"];

    #[test]
    fn fresh_session() {
        let session = session("angle", SCENARIO);
        assert_eq!(session.state(), SessionState::Guessing);
        assert_eq!(session.candidates().len(), 4);
        assert!(session.attempts().is_empty());
        assert_eq!(session.suggestion().unwrap().text(), "ample");
    }

    #[test]
    fn automated_steps_reach_the_secret() {
        let mut session = session("angle", SCENARIO);

        assert_eq!(session.step().unwrap().to_string(), "vxxvv");
        assert_eq!(session.candidates().len(), 2);

        // angle and ankle tie; the later word goes first
        assert_eq!(session.step().unwrap().to_string(), "vvxvv");
        assert_eq!(session.step().unwrap(), Feedback::SOLVED);

        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.step(), None);

        let guesses: Vec<&str> = session.attempts().iter().map(|a| a.guess.text()).collect();
        assert_eq!(guesses, ["ample", "ankle", "angle"]);
        assert_eq!(session.feedback_log().last(), Some(&Feedback::SOLVED));
    }

    #[test]
    fn submit_rejects_bad_format_without_cost() {
        let mut session = session("angle", SCENARIO);
        for raw in ["angl", "angles", "an1le", ""] {
            assert!(matches!(
                session.submit(raw),
                Err(SessionError::Guess(GuessError::InvalidGuessFormat(_)))
            ));
        }
        assert!(session.attempts().is_empty());
        assert_eq!(session.candidates().len(), 4);
    }

    #[test]
    fn submit_rejects_unknown_words() {
        let mut session = session("angle", SCENARIO);
        assert_eq!(
            session.submit("crane"),
            Err(SessionError::Guess(GuessError::NotInCandidateSet(
                "crane".to_string()
            )))
        );
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn submit_rejects_eliminated_words() {
        let mut session = session("angle", SCENARIO);
        session.submit("ample").unwrap();

        // apple was truncated away after the first round
        assert!(matches!(
            session.submit("apple"),
            Err(SessionError::Guess(GuessError::NotInCandidateSet(_)))
        ));
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn submit_accepts_mixed_case_and_whitespace() {
        let mut session = session("angle", SCENARIO);
        assert_eq!(session.submit("  ANGLE \n"), Ok(Feedback::SOLVED));
        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.submit("angle"), Err(SessionError::Finished));
    }

    #[test]
    fn missing_secret_exhausts_the_candidates() {
        let mut session = session("crane", SCENARIO);
        while session.step().is_some() {}

        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(session.candidates().is_empty());
        assert!(!session.attempts().is_empty());
        assert!(session.feedback_log().iter().all(|f| !f.is_solved()));
    }

    #[test]
    fn alphabet_restriction_applies_up_front() {
        let alphabet: LetterSet = b"angle".iter().copied().collect();
        let config = SolverConfig::default().alphabet(alphabet);
        let session = Session::new(Word::new("angle").unwrap(), &corpus(SCENARIO), config);

        assert_eq!(session.candidates(), &[Word::new("angle").unwrap()]);
    }

    #[test]
    fn empty_corpus_is_exhausted_immediately() {
        let session = session("angle", &[]);
        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.suggestion(), None);
    }

    #[test]
    fn candidate_counts_are_recorded() {
        let mut session = session("angle", SCENARIO);
        session.step();
        let attempt = session.attempts()[0];
        assert_eq!(attempt.candidates_before, 4);
        assert_eq!(attempt.candidates_after, 2);
    }

    #[test]
    fn corpus_is_left_untouched() {
        let corpus = corpus(SCENARIO);
        let mut session = Session::new(Word::new("angle").unwrap(), &corpus, SolverConfig::default());
        while session.step().is_some() {}
        assert_eq!(corpus.len(), 4);
    }
}
