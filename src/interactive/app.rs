//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{RoundStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 6;
const AGAIN: &str = "Press 'n' for a new round or 'q' to quit.";

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Hint revealed for the current guess
    pub show_hint: bool,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_hint: false,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Welcome! Guess the word in {} tries.",
                app.session.round().max_attempts()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Tab: hint | Ctrl-N: new round | Ctrl-T: hard mode | Esc: quit",
            MessageStyle::Info,
        );
        app
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Char('t') if ctrl => self.toggle_hard_mode(),
            _ if self.session.round().status().is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            KeyCode::Tab => self.toggle_hint(),
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LEN {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the typed guess
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&text) {
            Ok(submission) => {
                self.show_hint = false;
                if let Some(e) = submission.hint_error {
                    self.add_message(&format!("Hints stopped: {e}"), MessageStyle::Error);
                }

                let round = self.session.round();
                match submission.status {
                    RoundStatus::Won => {
                        let celebration = match round.attempt() {
                            1 => "🎯 HOLE IN ONE!",
                            2 => "🔥 MAGNIFICENT! Two guesses!",
                            3 => "✨ SPLENDID! Three guesses!",
                            4 => "👏 GREAT JOB! Four guesses!",
                            5 => "🎉 NICE WORK! Five guesses!",
                            _ => "😅 PHEW! Got it!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(AGAIN, MessageStyle::Info);
                    }
                    RoundStatus::Lost => {
                        let secret = round.secret();
                        self.add_message(
                            &format!("Out of guesses! The word was {secret}."),
                            MessageStyle::Error,
                        );
                        self.add_message(AGAIN, MessageStyle::Info);
                    }
                    RoundStatus::InProgress => {
                        let left = round.remaining_attempts();
                        self.add_message(&format!("{left} guesses left"), MessageStyle::Info);
                    }
                }
            }
            Err(e) => {
                log::debug!("guess {text:?} refused: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = text;
            }
        }
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    pub fn toggle_hard_mode(&mut self) {
        let hard = !self.session.round().is_hard_mode();
        match self.session.set_hard_mode(hard) {
            Ok(()) => self.add_message(
                if hard { "Hard mode on" } else { "Hard mode off" },
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.input_buffer.clear();
        self.show_hint = false;
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
