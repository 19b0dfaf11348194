//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

fn paint(text: &str, mark: Mark) -> ColoredString {
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Guess letters on coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| paint(&format!(" {} ", char::from(letter)), mark).to_string())
        .collect()
}

/// The alphabet coloured by the best mark seen for each letter
#[must_use]
pub fn letter_summary(states: &BTreeMap<char, Mark>) -> String {
    ('A'..='Z')
        .map(|letter| {
            let text = letter.to_string();
            match states.get(&letter) {
                Some(&Mark::Absent) => text.bright_black().strikethrough().to_string(),
                Some(&mark) => paint(&text, mark).to_string(),
                None => text,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of a guess distribution, never empty for a non-zero count
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max_count as f64, width);
    if count > 0 && !bar.starts_with('█') {
        let mut fixed = String::from("█");
        fixed.push_str(&"░".repeat(width.saturating_sub(1)));
        return fixed;
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_bar_shows_small_counts() {
        assert_eq!(distribution_bar(1, 1000, 5), "█░░░░");
        assert_eq!(distribution_bar(0, 1000, 5), "░░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        let guess = Word::new("trace").unwrap();
        let feedback = Feedback::score(&guess, &Word::new("crane").unwrap());

        let text = colored_guess(&guess, &feedback);
        for letter in ["T", "R", "A", "C", "E"] {
            assert!(text.contains(letter));
        }
    }

    #[test]
    fn letter_summary_lists_alphabet() {
        let summary = letter_summary(&BTreeMap::new());
        assert_eq!(summary, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
