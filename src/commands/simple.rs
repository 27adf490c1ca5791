//! Simple interactive CLI mode
//!
//! The player types guesses on stdin; the engine judges them against a
//! known secret and enforces the same rules the automated solver follows.

use crate::error::{GuessError, SolveError};
use crate::solver::{GuessSource, Session, Solution, Solver};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads guesses from a line-oriented reader
///
/// Besides words, understands `hint` (show the top-scoring candidate),
/// `list` (show a few remaining candidates) and `quit`.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> GuessSource for PromptSource<R, W> {
    fn next_guess(&mut self, session: &Session) -> io::Result<Option<String>> {
        let turn = session.attempts().len() + 1;

        loop {
            let prompt = format!(
                "Turn {turn} ({} candidates) - your guess",
                session.candidates().len()
            );
            let Some(input) = self.read_line(&prompt)? else {
                return Ok(None);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(None),
                "hint" | "h" => {
                    if let Some(top) = session.suggestion() {
                        let top = top.text().to_uppercase();
                        writeln!(self.output, "💡 Top scoring word: {top}")?;
                    }
                }
                "list" | "l" => {
                    for word in session.scores().ranked(session.candidates()).iter().take(10) {
                        writeln!(self.output, "  • {}", word.text().to_uppercase())?;
                    }
                }
                _ => return Ok(Some(input)),
            }
        }
    }

    fn rejected(&mut self, _guess: &str, error: &GuessError) {
        // Prompt output is best effort; a broken stdout surfaces on the next read
        let _ = writeln!(self.output, "{}", format!("❌ {error}").red());
    }
}

/// Run the simple interactive CLI mode against `secret`
///
/// # Errors
///
/// Returns an error if the secret is invalid, input cannot be read, the
/// player quits, or the candidates run out.
pub fn run_simple(solver: &Solver<'_>, secret: &str) -> Result<Solution, SolveError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Bot - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word. Every guess must be a remaining candidate");
    println!("and may only use letters that have not been ruled out.\n");
    println!("  🟩 = right letter, right spot");
    println!("  🟨 = in the word, wrong spot");
    println!("  ⬜ = not in the word\n");
    println!("Commands: 'hint' for the top word, 'list' for candidates, 'quit' to exit\n");

    let stdin = io::stdin();
    let mut source = PromptSource::new(stdin.lock(), io::stdout());
    let mut reporter = Reporter(&mut source);

    solver.solve_with(secret, &mut reporter)
}

/// Echoes each evaluated guess before asking for the next one
struct Reporter<'s, S>(&'s mut S);

impl<S: GuessSource> GuessSource for Reporter<'_, S> {
    fn next_guess(&mut self, session: &Session) -> io::Result<Option<String>> {
        if let Some(last) = session.attempts().last() {
            println!(
                "   {} {}  ({} → {} candidates)",
                last.guess.text().to_uppercase().bright_white().bold(),
                last.feedback.to_emoji(),
                last.candidates_before,
                last.candidates_after
            );
        }
        self.0.next_guess(session)
    }

    fn rejected(&mut self, guess: &str, error: &GuessError) {
        self.0.rejected(guess, error);
    }
}
