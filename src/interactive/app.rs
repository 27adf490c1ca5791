//! TUI application state and logic

use crate::commands::MAX_ATTEMPTS;
use crate::config::SolverConfig;
use crate::core::{Corpus, WORD_LENGTH, Word};
use crate::error::SessionError;
use crate::solver::{Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub config: SolverConfig,
    pub session: Session,
    pub mode: AppMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing guesses
    Guessing,
    /// Game over; waiting for a new game or quit
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count, index 1 through 6
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

/// Pick a random secret from the corpus
#[must_use]
pub fn random_secret(corpus: &Corpus) -> Option<Word> {
    corpus.words().choose(&mut rand::rng()).copied()
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: SolverConfig, secret: Word) -> Self {
        Self {
            corpus,
            config,
            session: Session::new(secret, corpus, config),
            mode: AppMode::Guessing,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the secret word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Guesses must stay consistent with every clue so far.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start over against `secret`, keeping statistics
    pub fn new_game(&mut self, secret: Word) {
        self.session = Session::new(secret, self.corpus, self.config);
        self.mode = AppMode::Guessing;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Ok(feedback) => {
                let remaining = self.session.candidates().len();
                self.add_message(
                    &format!("{} {}", input.to_uppercase(), feedback.to_emoji()),
                    MessageStyle::Info,
                );

                match self.session.state() {
                    SessionState::Solved => self.finish_won(),
                    SessionState::Exhausted => self.finish_lost(),
                    SessionState::Guessing => self.add_message(
                        &format!("{remaining} candidates remaining"),
                        MessageStyle::Info,
                    ),
                }
            }
            Err(SessionError::Guess(err)) => {
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(SessionError::Finished) => {
                self.mode = AppMode::Finished;
                self.add_message("The game is over.", MessageStyle::Error);
            }
        }
    }

    fn finish_won(&mut self) {
        self.mode = AppMode::Finished;
        self.stats.total_games += 1;
        self.stats.games_won += 1;

        let guess_count = self.session.attempts().len();
        if guess_count <= MAX_ATTEMPTS {
            self.stats.guess_distribution[guess_count] += 1;
        }

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_lost(&mut self) {
        self.mode = AppMode::Finished;
        self.stats.total_games += 1;
        self.add_message(
            &format!(
                "No candidates remain. The word was {}.",
                self.session.secret().text().to_uppercase()
            ),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Put the top-scoring candidate in the input buffer
    pub fn hint(&mut self) {
        if let Some(top) = self.session.suggestion() {
            self.input_buffer = top.text().to_string();
            self.add_message(
                &format!(
                    "Hint: {} scores {}",
                    top.text().to_uppercase(),
                    self.session.scores().total(&top)
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No candidates to suggest!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => {
                    if let Some(secret) = random_secret(self.corpus) {
                        self.new_game(secret);
                    }
                }
                _ => {}
            },
            AppMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.hint(),
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if self.input_buffer.len() == WORD_LENGTH {
                        self.submit_guess();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
