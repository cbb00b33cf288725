//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It only
//! reads the `App` model; all state changes happen in the runtime.

use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, OptionMark};
use crate::config::UiSettings;
use crate::player::Launcher;
use crate::quiz::ROUNDS;

const CONTROLS: [(&str, &str); 5] = [
    ("p/space", "play fragment"),
    ("1-4", "answer"),
    ("j/k", "up/down"),
    ("enter", "answer selected"),
    ("q", "quit"),
];

/// Render the controls help text; the `n` action depends on the phase.
fn controls_text(continue_label: &str) -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .chain(std::iter::once(format!(
            "[n] {}",
            continue_label.to_lowercase()
        )))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_padding() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<R: Rng, L: Launcher>(frame: &mut Frame, app: &App<R, L>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tunequiz ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let mut status: Vec<Line> = vec![Line::from(app.info_text()).bold()];
    {
        let mut parts: Vec<String> = Vec::new();
        if app.playing {
            parts.push("♪ Playing".to_string());
        } else if app.can_play() {
            parts.push("Silent".to_string());
        }
        if let Some(dir) = &app.current_dir {
            parts.push(format!("Dir: {dir} ({} tracks)", app.session.library().len()));
        }
        status.push(Line::from(parts.join(" • ")));
    }
    if let Some(notice) = &app.notice {
        status.push(Line::from(notice.as_str()).fg(Color::Yellow));
    }
    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(left_padding()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Options, or the final score
    if app.session.is_finished() {
        let text = format!(
            "You scored {} out of {}.\n\nPress [n] to play again.",
            app.session.score(),
            ROUNDS
        );
        let summary = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" game over "));
        frame.render_widget(summary, chunks[2]);
    } else {
        let items: Vec<ListItem> = app
            .option_labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let text = format!("[{}] {label}", i + 1);
                match app.option_mark(i) {
                    OptionMark::Plain => ListItem::new(text),
                    OptionMark::Correct => ListItem::new(format!("{text}  ✓"))
                        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    OptionMark::WrongPick => ListItem::new(format!("{text}  ✗"))
                        .style(Style::default().fg(Color::Red)),
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" which song is it? "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if app.can_answer() {
            state.select(Some(app.cursor));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    let footer = Paragraph::new(controls_text(app.continue_label()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_padding()),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
