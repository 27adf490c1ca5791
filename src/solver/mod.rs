//! Wordle solving engine
//!
//! Scoring, constraint filtering and the session loop that ties them to the
//! feedback computed in [`core`](crate::core).

mod constraints;
mod engine;
mod scorer;
mod session;

pub use constraints::{Constraints, truncate};
pub use engine::{GuessSource, Solution, Solver, TopScored};
pub use scorer::{RANGE_COUNT, RANGES, ScoreMap, ScoredWord, build_scores};
pub use session::{Attempt, Session, SessionState};
