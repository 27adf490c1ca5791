//! TUI rendering with ratatui
//!
//! Draws the board, the solver's view of the game and the input line.

use super::app::{App, AppMode, MessageStyle};
use crate::commands::MAX_ATTEMPTS;
use crate::core::{Mark, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE BOT - Play Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let mut lines = Vec::new();

    for attempt in attempts {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (pos, &mark) in attempt.feedback.marks().iter().enumerate() {
            spans.push(tile(char::from(attempt.guess.char_at(pos)), mark_color(mark)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(
                "  {} → {}",
                attempt.candidates_before, attempt.candidates_after
            ),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.mode == AppMode::Guessing {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        let typed: Vec<char> = app.input_buffer.chars().collect();
        for pos in 0..WORD_LENGTH {
            let letter = typed.get(pos).copied().unwrap_or(' ');
            spans.push(tile(letter, Color::White));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Pad to the official six rows
    let drawn = attempts.len() + usize::from(app.mode == AppMode::Guessing);
    for _ in drawn..MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile(' ', Color::Gray), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(40), // Candidates
            Constraint::Length(5),      // Constraints
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_constraints(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.corpus.len().max(1);
    let remaining = app.session.candidates().len();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = (eliminated * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct.min(100))
        .label(format!("{remaining}/{total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let scores = app.session.scores();

    let content = if app.mode == AppMode::Finished {
        vec![Line::from(format!(
            "The word was {}",
            app.session.secret().text().to_uppercase()
        ))]
    } else {
        let mut lines = vec![Line::from(format!("{} remaining", candidates.len()))];
        for word in scores.ranked(candidates).into_iter().take(8) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<5}", word.text().to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {:>4}", scores.total(word)),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();
    let pins: String = (0..WORD_LENGTH)
        .map(|pos| {
            constraints
                .pinned(pos)
                .map_or('_', |c| char::from(c).to_ascii_uppercase())
        })
        .collect();

    let content = vec![
        Line::from(format!("Pinned:  {pins}")),
        Line::from(format!("Letters: {}", constraints.valid_letters())),
        Line::from(format!(
            "Misplaced: {}",
            constraints
                .invalid_positions()
                .keys()
                .map(|&c| char::from(c).to_ascii_uppercase())
                .collect::<String>()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.mode {
        AppMode::Finished => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        AppMode::Guessing => (
            " Enter Guess | TAB for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn_text = format!("Turn: {}", app.session.attempts().len() + 1);
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.session.candidates().len());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.mode {
        AppMode::Finished => "q: Quit | n: New Game",
        AppMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Hint",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
