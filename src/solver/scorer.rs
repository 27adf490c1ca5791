//! Letter-frequency heuristic scoring
//!
//! Every word gets two scores measured against the current corpus snapshot:
//! - appearance: how many corpus words contain each of its distinct letters
//! - position: how many corpus words share each of its substrings at the
//!   same offsets (every range except the whole word)
//!
//! Words sharing common letters *and* common affixes with the rest of the
//! candidates score highest. Scores depend on the live candidate set, so they
//! are rebuilt after every filtering step.

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Number of substring ranges scored per word
pub const RANGE_COUNT: usize = WORD_LENGTH * (WORD_LENGTH + 1) / 2 - 1;

/// All `[start, end)` substring ranges except the whole word
pub const RANGES: [(usize, usize); RANGE_COUNT] = substring_ranges();

const fn substring_ranges() -> [(usize, usize); RANGE_COUNT] {
    let mut ranges = [(0, 0); RANGE_COUNT];
    let mut n = 0;
    let mut start = 0;
    while start < WORD_LENGTH {
        let mut end = start + 1;
        while end <= WORD_LENGTH {
            if !(start == 0 && end == WORD_LENGTH) {
                ranges[n] = (start, end);
                n += 1;
            }
            end += 1;
        }
        start += 1;
    }
    ranges
}

/// Heuristic scores of one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoredWord {
    pub appearance: u32,
    pub position: u32,
}

impl ScoredWord {
    #[inline]
    #[must_use]
    pub const fn total(self) -> u32 {
        self.appearance + self.position
    }
}

/// Scores for every word of a corpus snapshot
#[derive(Debug, Clone, Default)]
pub struct ScoreMap {
    scores: FxHashMap<Word, ScoredWord>,
}

impl ScoreMap {
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<ScoredWord> {
        self.scores.get(word).copied()
    }

    /// Total score, zero for words outside the snapshot
    #[must_use]
    pub fn total(&self, word: &Word) -> u32 {
        self.get(word).map_or(0, ScoredWord::total)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The highest scoring candidate
    ///
    /// Ties go to the candidate that comes last in `candidates`.
    #[must_use]
    pub fn best<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        // max_by_key yields the last of equal maxima
        candidates.iter().max_by_key(|w| self.total(w))
    }

    /// Candidates ordered best first, with the same tie order as [`best`](Self::best)
    #[must_use]
    pub fn ranked<'a>(&self, candidates: &'a [Word]) -> Vec<&'a Word> {
        let mut ranked: Vec<&Word> = candidates.iter().rev().collect();
        ranked.sort_by_key(|w| Reverse(self.total(w)));
        ranked
    }
}

/// Build heuristic scores for every word of `corpus`
///
/// # Examples
/// ```
/// use wordle_bot::core::Word;
/// use wordle_bot::solver::build_scores;
///
/// let corpus = vec![Word::new("crane").unwrap()];
/// let scores = build_scores(&corpus);
/// let scored = scores.get(&corpus[0]).unwrap();
///
/// // A lone word only matches itself
/// assert_eq!(scored.appearance, 5);
/// assert_eq!(scored.position, 14);
/// ```
#[must_use]
pub fn build_scores(corpus: &[Word]) -> ScoreMap {
    // How many words contain each letter at least once
    let mut appearances = [0u32; 26];
    for word in corpus {
        for letter in word.letters().iter() {
            appearances[usize::from(letter - b'a')] += 1;
        }
    }

    // How many words carry each substring at each range
    let mut substrings: Vec<FxHashMap<&[u8], u32>> = vec![FxHashMap::default(); RANGE_COUNT];
    for word in corpus {
        for (counts, &(start, end)) in substrings.iter_mut().zip(RANGES.iter()) {
            *counts.entry(&word.chars()[start..end]).or_insert(0) += 1;
        }
    }

    let scores = corpus
        .iter()
        .map(|word| {
            let appearance = word
                .letters()
                .iter()
                .map(|letter| appearances[usize::from(letter - b'a')])
                .sum();

            let position = substrings
                .iter()
                .zip(RANGES.iter())
                .map(|(counts, &(start, end))| {
                    counts.get(&word.chars()[start..end]).copied().unwrap_or(0)
                })
                .sum();

            (
                *word,
                ScoredWord {
                    appearance,
                    position,
                },
            )
        })
        .collect();

    ScoreMap { scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn range_table_skips_whole_word() {
        assert_eq!(RANGE_COUNT, 14);
        assert_eq!(RANGES[0], (0, 1));
        assert!(!RANGES.contains(&(0, WORD_LENGTH)));
        assert!(RANGES.contains(&(1, WORD_LENGTH)));
        assert!(RANGES.iter().all(|&(s, e)| s < e && e <= WORD_LENGTH));
    }

    #[test]
    fn single_word_corpus_scores_one_per_range() {
        let corpus = words(&["apple"]);
        let scored = build_scores(&corpus).get(&corpus[0]).unwrap();

        // Repeated 'p' counts once
        assert_eq!(scored.appearance, 4);
        assert_eq!(scored.position, RANGE_COUNT as u32);
    }

    #[test]
    fn scenario_scores() {
        let corpus = words(&["apple", "angle", "ankle", "ample"]);
        let scores = build_scores(&corpus);

        let expect = [
            ("apple", 14, 29),
            ("angle", 15, 28),
            ("ankle", 15, 28),
            ("ample", 15, 29),
        ];
        for (word, appearance, position) in expect {
            let scored = scores.get(&Word::new(word).unwrap()).unwrap();
            assert_eq!(scored.appearance, appearance, "appearance of {word}");
            assert_eq!(scored.position, position, "position of {word}");
        }

        assert_eq!(scores.best(&corpus).unwrap().text(), "ample");
    }

    #[test]
    fn ties_go_to_the_last_candidate() {
        let corpus = words(&["angle", "ankle"]);
        let scores = build_scores(&corpus);

        assert_eq!(scores.total(&corpus[0]), scores.total(&corpus[1]));
        assert_eq!(scores.best(&corpus).unwrap().text(), "ankle");

        let ranked: Vec<&str> = scores.ranked(&corpus).iter().map(|w| w.text()).collect();
        assert_eq!(ranked, ["ankle", "angle"]);
    }

    #[test]
    fn ranked_starts_with_best() {
        let corpus = words(&["apple", "angle", "ankle", "ample", "crane"]);
        let scores = build_scores(&corpus);
        let ranked = scores.ranked(&corpus);

        assert_eq!(ranked.len(), corpus.len());
        assert_eq!(ranked[0], scores.best(&corpus).unwrap());
        assert!(
            ranked
                .windows(2)
                .all(|pair| scores.total(pair[0]) >= scores.total(pair[1]))
        );
    }

    #[test]
    fn empty_corpus() {
        let scores = build_scores(&[]);
        assert!(scores.is_empty());
        assert!(scores.best(&[]).is_none());
    }

    #[test]
    fn unknown_words_score_zero() {
        let scores = build_scores(&words(&["apple"]));
        assert_eq!(scores.total(&Word::new("zzzzz").unwrap()), 0);
    }
}
