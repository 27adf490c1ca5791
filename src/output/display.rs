//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, MAX_ATTEMPTS, SolveResult};
use crate::solver::Solution;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Score:      {} (appearance {} + position {})",
                step.score.total(),
                step.score.appearance,
                step.score.position
            );
            println!(
                "  Feedback:   {} ({} correct, {} present)",
                step.feedback,
                step.feedback.count_correct(),
                step.feedback.count_present()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ Ran out of candidates after {} guesses",
                result.guesses.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the path the player took in interactive mode
pub fn print_solution(solution: &Solution) {
    println!();
    for attempt in &solution.attempts {
        println!(
            "   {} {}",
            attempt.guess.text().to_uppercase(),
            attempt.feedback.to_emoji()
        );
    }
    println!(
        "\n{}",
        format!(
            "🎉 Found {} in {} guesses!",
            solution.secret.text().to_uppercase(),
            solution.guess_count()
        )
        .green()
        .bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} words:", result.total_candidates);
    println!("   Appearance:  {}", result.appearance);
    println!("   Position:    {}", result.position);
    println!(
        "   Total:       {}",
        result.total.to_string().bright_yellow().bold()
    );
    let bar = create_progress_bar(
        (result.total_candidates - result.rank + 1) as f64,
        result.total_candidates as f64,
        30,
    );
    println!(
        "   Rank:        [{}] {} of {}",
        bar.green(),
        result.rank,
        result.total_candidates
    );
}

/// Print the top of the ranking
pub fn print_ranking(results: &[AnalysisResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP SCORING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let Some(best) = results.first().map(|r| r.total) else {
        println!("   (no words)");
        return;
    };

    for result in results {
        let bar = create_progress_bar(f64::from(result.total), f64::from(best), 20);
        println!(
            "   {:>3}. {}  [{}] {:>4}  ({} + {})",
            result.rank,
            result.word.to_uppercase().bright_white().bold(),
            bar.green(),
            result.total,
            result.appearance,
            result.position
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Success rate:     {}",
        format!(
            "{:.1}% ({}/{})",
            result.success_rate(),
            result.solved_within_limit,
            result.total_words
        )
        .green()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if guess_count > MAX_ATTEMPTS {
            format!("{guess_count}").red()
        } else {
            format!("{guess_count}").normal()
        };
        println!("   {label:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".yellow().bold());
        for (secret, guesses) in result.failures.iter().take(20) {
            println!("   {} ({guesses} guesses)", secret.text().to_uppercase());
        }
        if result.failures.len() > 20 {
            println!("   ... and {} more", result.failures.len() - 20);
        }
    }
}
