//! TUI rendering with ratatui
//!
//! Letter tiles colored by feedback status, a similarity gauge and the
//! command input box.

use super::app::{App, MessageStyle};
use crate::analysis::{analyze_letters, calculate_similarity};
use crate::core::{LetterStatus, Word};
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
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_puzzle_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD MORPH - Transformation Puzzle")
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

fn render_puzzle_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    render_words(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

/// Render a word as spaced letter tiles colored by feedback status
fn tile_line(current: &Word, target: &Word) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];

    for result in analyze_letters(current, target) {
        let style = match result.status {
            LetterStatus::Correct => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
            LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!(" {} ", result.letter.to_uppercase()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn index_line(len: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in 0..len {
        spans.push(Span::styled(
            format!(" {i:^1} "),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;

    let content = vec![
        Line::from(Span::styled(
            format!("  Target:  {}", state.target_word().text().to_uppercase()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        tile_line(state.current_word(), state.target_word()),
        index_line(state.current_word().len()),
        Line::default(),
        Line::from(format!(
            "  Cost: {}   Moves: {}",
            state.total_cost(),
            state.moves().len()
        )),
    ];

    let title = if state.is_complete() {
        " Puzzle - SOLVED "
    } else {
        " Puzzle "
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let total = app.state.moves().len();
    let history_items: Vec<ListItem> = app
        .state
        .moves()
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, mv)| ListItem::new(format!("{}: {} (cost {})", total - i, mv, mv.cost())))
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" Moves ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    render_similarity(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_similarity(f: &mut Frame, app: &App, area: Rect) {
    let similarity =
        calculate_similarity(app.state.current_word(), app.state.target_word());
    let percent = (similarity * 100.0).min(100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Similarity ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{:.0}%", similarity * 100.0));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = app.hint.as_ref().map_or_else(
        || "Type 'hint' for a suggestion".to_string(),
        Clone::clone,
    );

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().title(" Hint ").borders(Borders::ALL));

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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Command: d <i> | m <from> <to> | e <i> <char> | hint | new | undo | quit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let solved = Paragraph::new(format!("Solved: {}", app.stats.puzzles_completed))
        .alignment(Alignment::Center);
    f.render_widget(solved, chunks[0]);

    let cost = Paragraph::new(format!("Total cost: {}", app.stats.total_cost))
        .alignment(Alignment::Center);
    f.render_widget(cost, chunks[1]);

    let help = Paragraph::new("Enter: submit | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
