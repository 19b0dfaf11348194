//! TUI rendering with ratatui
//!
//! Board, keyboard, hint and hard mode panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LEN};
use crate::game::RoundStatus;
use crate::hints::HintMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::collections::BTreeMap;

const KEYBOARD: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE COACH 🟨")
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

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let board_height = u16::try_from(round.max_attempts())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(board_height), Constraint::Length(5)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &round.letter_states(), chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let mut lines: Vec<Line> = round
        .history()
        .iter()
        .map(|turn| {
            let tiles = turn
                .guess
                .letters()
                .iter()
                .zip(turn.feedback.marks())
                .flat_map(|(&letter, &mark)| {
                    [
                        Span::styled(format!(" {} ", char::from(letter)), mark_style(mark)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(tiles)
        })
        .collect();

    if !round.status().is_over() {
        let typed_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let typed = app.input_buffer.chars().map(Some).chain(std::iter::repeat(None));
        let tiles = typed
            .take(WORD_LEN)
            .flat_map(|c| {
                let text = c.map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                [
                    Span::styled(text, typed_style),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(tiles));
    }

    while lines.len() < round.max_attempts() {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if round.status() == RoundStatus::Lost {
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                round.secret().to_string(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let title = format!(" Guess {}/{} ", round.attempt(), round.max_attempts());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, states: &BTreeMap<char, Mark>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD
        .iter()
        .map(|row| {
            let keys = row
                .chars()
                .map(|c| {
                    let style = states
                        .get(&c)
                        .map_or_else(|| Style::default().fg(Color::White), |&m| mark_style(m));
                    Span::styled(format!(" {c} "), style)
                })
                .collect::<Vec<_>>();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Hard mode constraints
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_constraints(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let content = if app.session.settings().hints == HintMode::None {
        vec![Line::from("Hints are off")]
    } else if round.status().is_over() {
        vec![Line::from("Round over")]
    } else if !app.show_hint {
        vec![Line::from(Span::styled(
            "Press Tab to reveal a hint",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        match round.hint() {
            Ok(hint) => {
                let mut lines = vec![Line::from(vec![
                    Span::raw("Try: "),
                    Span::styled(
                        hint.to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])];
                if let Some(remaining) = round.remaining_candidates() {
                    lines.push(Line::from(format!("{remaining} candidates remain")));
                }
                lines
            }
            Err(e) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
        }
    };

    let title = format!(" Hint ({}) ", app.session.settings().hints);
    let hint = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(hint, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let used = round.attempt();
    let max = round.max_attempts();
    // Cast is safe: the ratio is clamped to [0, 100]
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let color = match round.status() {
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost => Color::Red,
        RoundStatus::InProgress => Color::Cyan,
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{max} used | {}", round.status()));
    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let content = if round.is_hard_mode() {
        if round.constraints().is_empty() {
            Line::from("No revealed letters yet")
        } else {
            Line::from(Span::styled(
                round.constraints().to_string(),
                Style::default().fg(Color::Yellow),
            ))
        }
    } else {
        Line::from(Span::styled(
            "Off (Ctrl-T before guessing)",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let constraints = Paragraph::new(content).block(
        Block::default()
            .title(" Hard Mode ")
            .borders(Borders::ALL),
    );
    f.render_widget(constraints, area);
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
    let (title, content, color) = if app.session.round().status().is_over() {
        (
            " Round over | 'n' or Enter: new round | 'q': quit ",
            "",
            Color::Green,
        )
    } else {
        (
            " Type a guess | Enter: submit | Tab: hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
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

    let mode_text = if app.session.round().is_hard_mode() {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.statistics();
    let stats_text = format!(
        "Played: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let streak_text = format!("Streak: {} (best {})", stats.current_streak, stats.max_streak);
    f.render_widget(Paragraph::new(streak_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New | Ctrl-T: Hard")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
