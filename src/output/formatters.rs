//! Formatting utilities for terminal output

use crate::commands::MAX_ATTEMPTS;
use crate::core::Feedback;

/// Render a shareable result grid
///
/// The header reads `Wordle <id> <n>/6`, or `X/6` when the game took more
/// than six guesses. At most six rows follow.
#[must_use]
pub fn share_grid(puzzle_id: u32, log: &[Feedback]) -> String {
    let solved_in_time = log.len() <= MAX_ATTEMPTS && log.last().is_some_and(Feedback::is_solved);
    let score = if solved_in_time {
        log.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("Wordle {puzzle_id} {score}/{MAX_ATTEMPTS}\n");
    for feedback in log.iter().take(MAX_ATTEMPTS) {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
