//! Wordle feedback calculation and representation
//!
//! Each guessed letter receives one mark:
//! - `v` = Correct (right letter, right position)
//! - `?` = Present (letter in word, wrong position)
//! - `x` = Absent (letter not available)
//!
//! The text form (`"vx?vv"`) is what the solver logs; the emoji form is what
//! gets shared.

use super::{LetterSet, WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Log symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'v',
            Self::Present => '?',
            Self::Absent => 'x',
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'v' | 'V' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '?' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback code for one guess: one mark per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess was the secret)
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: exact matches are Correct; letters that do not occur in
    ///    the secret at all are Absent; everything else stays open.
    /// 2. Second pass: the yellow pool is the *set* of secret letters at
    ///    positions not already Correct. Open positions become Present if
    ///    their letter is in the pool, Absent otherwise.
    ///
    /// The pool is a set rather than a multiset, so a guess repeating a letter
    /// can be credited with more Present marks than the secret has copies of
    /// that letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::{Feedback, Word};
    ///
    /// let secret = Word::new("angle").unwrap();
    /// let guess = Word::new("ample").unwrap();
    /// assert_eq!(Feedback::compute(&secret, &guess).to_string(), "vxxvv");
    /// ```
    #[must_use]
    pub fn compute(secret: &Word, guess: &Word) -> Self {
        let mut marks: [Option<Mark>; WORD_LENGTH] = [None; WORD_LENGTH];

        // First pass: greens and letters missing from the secret entirely
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *mark = Some(Mark::Correct);
            } else if !secret.has_letter(letter) {
                *mark = Some(Mark::Absent);
            }
        }

        // Yellow pool: secret letters at positions that did not turn green
        let pool: LetterSet = marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark != Some(Mark::Correct))
            .map(|(i, _)| secret.char_at(i))
            .collect();

        // Second pass: resolve the open positions
        let mut result = [Mark::Absent; WORD_LENGTH];
        for (i, mark) in marks.into_iter().enumerate() {
            result[i] = mark.unwrap_or_else(|| {
                if pool.contains(guess.char_at(i)) {
                    Mark::Present
                } else {
                    Mark::Absent
                }
            });
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback from `"vx?vv"`, `"G-YGG"` or `"🟩⬜🟨🟩🟩"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .chars()
            .map(Mark::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        marks
            .try_into()
            .map(Self)
            .map_err(|_| format!("Feedback must have 5 marks: {s}"))
    }
}
