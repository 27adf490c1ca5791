//! Benchmark command
//!
//! Plays the solver against many secrets and aggregates the guess counts.
//! Every secret gets its own session, so games run in parallel.

use crate::core::{Corpus, Word};
use crate::solver::{SessionState, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Guesses allowed by the official game
pub const MAX_ATTEMPTS: usize = 6;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    /// Secrets found within `MAX_ATTEMPTS` guesses
    pub solved_within_limit: usize,
    /// Secrets the solver could not reach, or reached too late
    pub failures: Vec<(Word, usize)>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Share of secrets solved within the official limit, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved_within_limit as f64 / self.total_words as f64 * 100.0
    }
}

/// Outcome of one game
struct Game {
    secret: Word,
    guesses: usize,
    solved: bool,
}

fn play(solver: &Solver<'_>, secret: Word) -> Game {
    let mut session = solver.session(secret);
    while session.step().is_some() {}

    Game {
        secret,
        guesses: session.attempts().len(),
        solved: session.state() == SessionState::Solved,
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Run benchmark on a set of secret words
#[must_use]
pub fn run_benchmark(solver: &Solver<'_>, secrets: &[Word], show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();
    let pb = progress_bar(secrets.len(), show_progress);

    let games: Vec<Game> = secrets
        .par_iter()
        .map(|&secret| {
            let game = play(solver, secret);
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut solved_within_limit = 0;

    for game in &games {
        total_guesses += game.guesses;
        *distribution.entry(game.guesses).or_insert(0) += 1;

        if game.solved && game.guesses <= MAX_ATTEMPTS {
            solved_within_limit += 1;
        } else {
            failures.push((game.secret, game.guesses));
        }
    }

    let total_words = games.len();
    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };

    BenchmarkResult {
        total_words,
        total_guesses,
        solved_within_limit,
        failures,
        average_guesses,
        min_guesses: games.iter().map(|g| g.guesses).min().unwrap_or(0),
        max_guesses: games.iter().map(|g| g.guesses).max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Pick the secrets to benchmark against
///
/// With no `count` the whole corpus is used in order. Otherwise `count`
/// words are sampled; a `seed` makes the sample reproducible.
#[must_use]
pub fn select_secrets(corpus: &Corpus, count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let mut words = corpus.words().to_vec();

    if let Some(count) = count {
        let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
        words.shuffle(&mut rng);
        words.truncate(count);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_corpus;

    fn scenario() -> Corpus {
        Corpus::from_strs(&["apple", "angle", "ankle", "ample"]).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let corpus = default_corpus();
        let solver = Solver::new(&corpus);
        let secrets = select_secrets(&corpus, Some(20), Some(7));

        let result = run_benchmark(&solver, &secrets, false);

        assert_eq!(result.total_words, 20);
        assert!(result.total_guesses >= 20);
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = scenario();
        let solver = Solver::new(&corpus);

        let result = run_benchmark(&solver, corpus.words(), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert_eq!(
            result.solved_within_limit + result.failures.len(),
            result.total_words
        );
    }

    #[test]
    fn benchmark_scenario_counts() {
        let corpus = scenario();
        let solver = Solver::new(&corpus);
        let angle = corpus.find("angle").unwrap();

        let result = run_benchmark(&solver, &[angle], false);

        assert_eq!(result.total_guesses, 3);
        assert_eq!(result.distribution.get(&3), Some(&1));
        assert!((result.success_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn secrets_outside_corpus_are_failures() {
        let corpus = scenario();
        let solver = Solver::new(&corpus);
        let crane = Word::new("crane").unwrap();

        let result = run_benchmark(&solver, &[crane], false);

        assert_eq!(result.solved_within_limit, 0);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, crane);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let corpus = scenario();
        let solver = Solver::new(&corpus);

        let result = run_benchmark(&solver, &[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let corpus = default_corpus();

        let a = select_secrets(&corpus, Some(10), Some(42));
        let b = select_secrets(&corpus, Some(10), Some(42));

        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert!(a.iter().all(|w| corpus.contains(w)));
    }

    #[test]
    fn selection_without_count_is_whole_corpus() {
        let corpus = scenario();
        assert_eq!(select_secrets(&corpus, None, None), corpus.words());
    }
}
