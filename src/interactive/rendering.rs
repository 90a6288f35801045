//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{GuessLetter, LetterStatus};
use crate::game::RoundStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

/// Colours for a tile of the given status
fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::InPlace => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::NotInWord => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn tile(letter: GuessLetter) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.letter.to_ascii_uppercase()),
        status_style(letter.status),
    )
}

fn tile_row(letters: impl IntoIterator<Item = GuessLetter>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, letter) in letters.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(tile(letter));
    }
    Line::from(spans)
}

/// Row currently being typed: entered letters, then blanks
fn pending_row(app: &App) -> Line<'static> {
    let typed: Vec<char> = app.input_buffer.chars().collect();
    let letters = (0..app.round.word_length()).map(|i| {
        let letter = typed.get(i).copied().unwrap_or('_');
        GuessLetter::new(letter, LetterStatus::Empty)
    });
    tile_row(letters)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.round.board();
    let playing = app.round.status() == RoundStatus::Playing;
    let current = app.round.attempts();

    let mut lines = Vec::with_capacity(board.len() * 2);
    for (i, row) in board.iter().enumerate() {
        if playing && i == current {
            lines.push(pending_row(app));
        } else {
            lines.push(tile_row(row.letters().iter().copied()));
        }
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.round.keyboard();
    let lines: Vec<Line> = keyboard
        .rows()
        .map(|row| {
            tile_row(
                row.into_iter()
                    .map(|(key, status)| GuessLetter::new(key, status)),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let state = app.round.state();
    let status_text = format!(
        "Status: {} | Attempts left: {}",
        state.status, state.attempts_remaining
    );
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = if state.status.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
