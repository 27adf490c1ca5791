//! Accumulated feedback constraints and candidate truncation

use crate::core::{Feedback, LetterSet, Mark, WORD_LENGTH, Word};
use crate::error::GuessError;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Everything learned about the secret so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    valid_letters: LetterSet,
    valid_positions: [Option<u8>; WORD_LENGTH],
    invalid_positions: BTreeMap<u8, BTreeSet<usize>>,
}

impl Constraints {
    /// No knowledge yet: every letter of `alphabet` is allowed anywhere
    #[must_use]
    pub const fn new(alphabet: LetterSet) -> Self {
        Self {
            valid_letters: alphabet,
            valid_positions: [None; WORD_LENGTH],
            invalid_positions: BTreeMap::new(),
        }
    }

    /// Letters not yet proven absent
    #[must_use]
    pub const fn valid_letters(&self) -> LetterSet {
        self.valid_letters
    }

    /// Pinned letters by position
    #[must_use]
    pub const fn valid_positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.valid_positions
    }

    /// Letters known present, with the positions they are known not to occupy
    #[must_use]
    pub const fn invalid_positions(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.invalid_positions
    }

    #[must_use]
    pub fn pinned(&self, position: usize) -> Option<u8> {
        self.valid_positions[position]
    }

    /// Fold one round of feedback into the constraints
    ///
    /// Pins are first-wins and never move. A letter already known to be
    /// present stays valid when an extra copy comes back absent; only that
    /// position is ruled out.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, mark) in feedback.marks().iter().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Absent => match self.invalid_positions.get_mut(&letter) {
                    Some(positions) => {
                        positions.insert(i);
                    }
                    None => {
                        self.valid_letters.remove(letter);
                    }
                },
                Mark::Present => {
                    self.invalid_positions.entry(letter).or_default().insert(i);
                }
                Mark::Correct => {
                    self.valid_positions[i].get_or_insert(letter);
                }
            }
        }
    }

    /// Check whether `word` is still consistent with everything recorded
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        // Letters known to be present must appear somewhere
        if self
            .invalid_positions
            .keys()
            .any(|&letter| !word.has_letter(letter))
        {
            return false;
        }

        word.chars().iter().enumerate().all(|(i, &letter)| {
            let pinned = self.valid_positions[i];

            // Removed letters only survive where they are pinned
            if !self.valid_letters.contains(letter) && pinned != Some(letter) {
                return false;
            }
            if pinned.is_some_and(|p| p != letter) {
                return false;
            }
            !self
                .invalid_positions
                .get(&letter)
                .is_some_and(|positions| positions.contains(&i))
        })
    }

    /// Check that a guess only uses letters that could still be in the secret
    ///
    /// A letter is allowed if it is still valid, pinned somewhere, or known
    /// to be present.
    ///
    /// # Errors
    /// Returns `GuessError::ForbiddenLetterUsed` naming the first offending letter.
    pub fn check_guess(&self, guess: &Word) -> Result<(), GuessError> {
        let forbidden = guess.chars().iter().copied().find(|&letter| {
            !self.valid_letters.contains(letter)
                && !self.valid_positions.contains(&Some(letter))
                && !self.invalid_positions.contains_key(&letter)
        });

        match forbidden {
            Some(letter) => Err(GuessError::ForbiddenLetterUsed {
                guess: guess.text().to_string(),
                letter: letter as char,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pins: String = self
            .valid_positions
            .iter()
            .map(|p| p.map_or('_', char::from))
            .collect();
        write!(f, "Valid: {pins}; Invalid: {{")?;
        for (n, (letter, positions)) in self.invalid_positions.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {positions:?}", *letter as char)?;
        }
        write!(f, "}}; Letters: {}", self.valid_letters)
    }
}

/// Remove every candidate that violates `constraints`
///
/// Violators are collected first and deleted afterwards. Returns the number
/// of words removed; a second call with unchanged constraints removes none.
pub fn truncate(candidates: &mut Vec<Word>, constraints: &Constraints) -> usize {
    let removed: FxHashSet<Word> = candidates
        .iter()
        .filter(|word| !constraints.admits(word))
        .copied()
        .collect();

    if !removed.is_empty() {
        candidates.retain(|word| !removed.contains(word));
    }

    removed.len()
}
