//! TUI rendering with ratatui
//!
//! Draws the board rows, the guess input, end-of-game message and log.

use super::app::{App, MessageStyle};
use crate::core::LetterFeedback;
use crate::game::{GameStatus, GuessView};
use crate::settings::{MAX_GUESSES_COUNT, WORD_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    // One line per row plus a spacer between rows, plus borders
    let board_height = (MAX_GUESSES_COUNT * 2 + 1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Input
            Constraint::Length(3),            // End-of-game / attempts
            Constraint::Min(4),               // Messages and warnings
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_outcome(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn feedback_style(feedback: LetterFeedback) -> Style {
    let style = match feedback {
        LetterFeedback::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        LetterFeedback::Almost => Style::default().bg(Color::Yellow).fg(Color::Black),
        LetterFeedback::Incorrect => Style::default().bg(Color::DarkGray).fg(Color::White),
    };
    style.add_modifier(Modifier::BOLD)
}

fn row_line(view: GuessView<'_>) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_SIZE * 2);

    for position in 0..WORD_SIZE {
        if position > 0 {
            spans.push(Span::raw(" "));
        }
        let cell = match view {
            GuessView::Submitted(guess) => Span::styled(
                format!(" {} ", char::from(guess.word.char_at(position))),
                feedback_style(guess.feedback.get(position)),
            ),
            GuessView::Typing(input) => match input.chars().nth(position) {
                Some(c) => Span::styled(
                    format!(" {c} "),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            },
            GuessView::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(cell);
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES_COUNT * 2);
    for (i, view) in app.board.guess_views().into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(row_line(view));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.board.is_input_disabled() {
        (" Input disabled ", Color::DarkGray)
    } else {
        (" Your guess (Enter to submit) ", Color::Yellow)
    };

    let input = Paragraph::new(app.board.input().to_string())
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

fn render_outcome(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (app.board.status(), app.board.end_message()) {
        (GameStatus::Won, Some(message)) => (message.to_string(), Color::Green),
        (GameStatus::Lost, Some(message)) => (message.to_string(), Color::Red),
        _ => (
            format!("Attempts left: {}", app.board.state().remaining_guesses()),
            Color::White,
        ),
    };

    let outcome = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(outcome, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let warnings = app.board.warnings().iter().map(|warning| {
        ListItem::new(format!("warning: {warning}")).style(Style::default().fg(Color::Yellow))
    });

    let messages = app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    });

    let list = List::new(warnings.chain(messages).collect::<Vec<_>>())
        .block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.board.is_input_disabled() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
