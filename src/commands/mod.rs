//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word, top_words};
pub use benchmark::{BenchmarkResult, MAX_ATTEMPTS, run_benchmark, select_secrets};
pub use simple::{PromptSource, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
