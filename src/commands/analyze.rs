//! Word analysis command
//!
//! Reports the heuristic scores of a word and the top of the ranking.

use crate::core::{Corpus, Word};
use crate::error::GuessError;
use crate::solver::build_scores;

/// Score breakdown of one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub word: String,
    pub appearance: u32,
    pub position: u32,
    pub total: u32,
    /// 1-based place in the corpus ranking
    pub rank: usize,
    pub total_candidates: usize,
}

/// Analyze the heuristic score of a word against the whole corpus
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the corpus
pub fn analyze_word(word: &str, corpus: &Corpus) -> Result<AnalysisResult, GuessError> {
    let target = Word::new(word).map_err(|_| GuessError::InvalidGuessFormat(word.to_string()))?;

    let scores = build_scores(corpus.words());
    let scored = scores
        .get(&target)
        .ok_or_else(|| GuessError::NotInCandidateSet(target.text().to_string()))?;

    let rank = scores
        .ranked(corpus.words())
        .iter()
        .position(|w| **w == target)
        .map_or(corpus.len(), |i| i + 1);

    Ok(AnalysisResult {
        word: target.text().to_string(),
        appearance: scored.appearance,
        position: scored.position,
        total: scored.total(),
        rank,
        total_candidates: corpus.len(),
    })
}

/// The `count` best scoring words of the corpus, best first
#[must_use]
pub fn top_words(corpus: &Corpus, count: usize) -> Vec<AnalysisResult> {
    let scores = build_scores(corpus.words());

    scores
        .ranked(corpus.words())
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, word)| {
            let scored = scores.get(word).unwrap_or_default();
            AnalysisResult {
                word: word.text().to_string(),
                appearance: scored.appearance,
                position: scored.position,
                total: scored.total(),
                rank: i + 1,
                total_candidates: corpus.len(),
            }
        })
        .collect()
}
