//! Simple line-oriented game
//!
//! Text-based play without the TUI. Works on any reader and writer so it can
//! be driven from scripts and tests.

use crate::game::{RoundStatus, Session};
use crate::output::formatters::{colored_guess, letter_summary};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    NewRound,
    Hint,
    ToggleHard,
    Stats,
    Help,
    Unknown(&'a str),
    Guess(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.strip_prefix(':') {
            Some("quit" | "q") => Self::Quit,
            Some("new" | "n") => Self::NewRound,
            Some("hint" | "h") => Self::Hint,
            Some("hard") => Self::ToggleHard,
            Some("stats") => Self::Stats,
            Some("help" | "?") => Self::Help,
            Some(other) => Self::Unknown(other),
            None => Self::Guess(line),
        }
    }
}

const HELP: &str = "Commands: :new  :hint  :hard  :stats  :help  :quit";

/// Run the simple game until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}", "Wordle Coach".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. {HELP}",
        crate::core::WORD_LEN,
        session.round().max_attempts()
    )?;
    print_prompt(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            print_prompt(session, &mut out)?;
            continue;
        }

        match Input::parse(line) {
            Input::Quit => break,
            Input::NewRound => {
                session.new_round();
                writeln!(out, "New round started.")?;
            }
            Input::Hint => match session.round().hint() {
                Ok(hint) => {
                    let remaining = session
                        .round()
                        .remaining_candidates()
                        .map(|n| format!(" ({n} candidates)"))
                        .unwrap_or_default();
                    writeln!(out, "Hint: {}{remaining}", hint.to_string().bright_yellow())?;
                }
                Err(e) => writeln!(out, "{} {e}", "No hint:".red())?,
            },
            Input::ToggleHard => {
                let hard = !session.round().is_hard_mode();
                match session.set_hard_mode(hard) {
                    Ok(()) => writeln!(out, "Hard mode {}.", if hard { "on" } else { "off" })?,
                    Err(e) => writeln!(out, "{}", e.to_string().red())?,
                }
            }
            Input::Stats => print_statistics(session, &mut out)?,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Unknown(cmd) => writeln!(out, "Unknown command :{cmd}. {HELP}")?,
            Input::Guess(text) => play_guess(session, text, &mut out)?,
        }

        print_prompt(session, &mut out)?;
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

fn play_guess<W: Write>(session: &mut Session, text: &str, out: &mut W) -> io::Result<()> {
    let submission = match session.submit(text) {
        Ok(submission) => submission,
        Err(e) => return writeln!(out, "{} {e}", "Rejected:".red()),
    };

    let round = session.round();
    if let Some(turn) = round.history().last() {
        writeln!(
            out,
            "{}  {}",
            colored_guess(&turn.guess, &turn.feedback),
            turn.feedback.to_emoji()
        )?;
    }
    if let Some(e) = &submission.hint_error {
        writeln!(out, "{} {e}", "Hints stopped:".yellow())?;
    }

    match submission.status {
        RoundStatus::Won => {
            writeln!(
                out,
                "{} Solved in {}/{}.",
                "You win!".green().bold(),
                round.attempt(),
                round.max_attempts()
            )?;
            print_statistics(session, out)?;
            writeln!(out, "Type :new to play again.")?;
        }
        RoundStatus::Lost => {
            writeln!(
                out,
                "{} The word was {}.",
                "Out of guesses.".red().bold(),
                round.secret().to_string().bright_white().bold()
            )?;
            print_statistics(session, out)?;
            writeln!(out, "Type :new to play again.")?;
        }
        RoundStatus::InProgress => {
            writeln!(out, "{}", letter_summary(&round.letter_states()))?;
            if round.is_hard_mode() && !round.constraints().is_empty() {
                writeln!(out, "Hard mode: {}", round.constraints())?;
            }
        }
    }
    Ok(())
}

fn print_prompt<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let round = session.round();
    if !round.status().is_over() {
        write!(
            out,
            "Guess {}/{}{}> ",
            round.attempt() + 1,
            round.max_attempts(),
            if round.is_hard_mode() { " [hard]" } else { "" }
        )?;
        out.flush()?;
    }
    Ok(())
}

fn print_statistics<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let stats = session.statistics();
    writeln!(
        out,
        "Played {} | Won {} ({:.0}%) | Streak {} (best {})",
        stats.played,
        stats.won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;
    for (guesses, count) in &stats.distribution {
        writeln!(out, "  {guesses}: {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::game::GameData;
    use crate::hints::HintMode;
    use std::io::Cursor;

    fn session(settings: Settings) -> Session {
        Session::new(GameData::embedded().unwrap(), settings, Some(11)).unwrap()
    }

    fn play(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Input::parse(":q"), Input::Quit);
        assert_eq!(Input::parse(":hint"), Input::Hint);
        assert_eq!(Input::parse(":bogus"), Input::Unknown("bogus"));
        assert_eq!(Input::parse("crane"), Input::Guess("crane"));
    }

    #[test]
    fn winning_with_the_secret() {
        let mut session = session(Settings::default());
        let secret = session.round().secret().to_string();

        let output = play(&mut session, &format!("{secret}\n:quit\n"));
        assert!(output.contains("You win!"));
        assert_eq!(session.statistics().won, 1);
    }

    #[test]
    fn rejected_guess_does_not_use_attempt() {
        let mut session = session(Settings::default());

        let output = play(&mut session, "qqqqq\nab\n");
        assert!(output.contains("QQQQQ is not in the word list"));
        assert!(output.contains("exactly 5 letters, got 2"));
        assert_eq!(session.round().attempt(), 0);
    }

    #[test]
    fn hint_command_follows_tree() {
        let mut session = session(Settings::default().with_hints(HintMode::Tree));

        let output = play(&mut session, ":hint\n");
        assert!(output.contains("ROATE"));
    }

    #[test]
    fn hard_mode_toggle_locks_after_guess() {
        let mut session = session(Settings::default());

        let output = play(&mut session, ":hard\nroate\n:hard\n");
        assert!(output.contains("Hard mode on."));
        assert!(output.contains("hard mode can only change before the first guess"));
        assert!(session.round().is_hard_mode());
    }

    #[test]
    fn new_round_resets_attempts() {
        let mut session = session(Settings::default());

        play(&mut session, "roate\n:new\n");
        assert_eq!(session.round().attempt(), 0);
        assert_eq!(session.statistics().played, 0);
    }

    #[test]
    fn candidate_hint_reports_remaining() {
        let mut session = session(Settings::default());
        let remaining = session.round().remaining_candidates().unwrap();

        let output = play(&mut session, ":hint\n");
        assert!(output.contains(&format!("({remaining} candidates)")));
        assert!(session.round().hint().is_ok());
    }
}
