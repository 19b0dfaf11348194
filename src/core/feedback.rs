//! Wordle feedback calculation and representation
//!
//! Feedback is one ternary mark per letter position:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! `Feedback` is the only feedback shape used in the crate. Renderers, the
//! candidate filter and the decision tree all consume it directly.

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mark for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    /// Numeric value used on the wire (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Convert a wire value back into a mark
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse any of the accepted single-character spellings
    ///
    /// Accepts digits (`0`/`1`/`2`), letters (`G`, `Y`, and `B`/`X`/`-`/`_` for
    /// absent, case-insensitive) and the coloured square emoji.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | 'B' | 'b' | 'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Letter form used in compact text output
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji form used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for feedback that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}'")]
    InvalidSymbol(char),
    #[error("invalid feedback value {0}, expected 0, 1 or 2")]
    InvalidValue(u8),
}

/// Feedback for one guess against one secret
///
/// Serialises as the ternary array, e.g. `[2,0,1,0,2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; WORD_LEN]", into = "[u8; WORD_LEN]")]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All correct (the guess is the secret)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// Number of distinct feedback values (3^5)
    pub const COUNT: usize = 243;

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is scored against `secret`
    ///
    /// This implements Wordle's exact rules for repeated letters.
    ///
    /// # Algorithm
    /// 1. Count the letters of the secret
    /// 2. First pass: mark exact matches Correct and consume their counts
    /// 3. Second pass: every other position is Present while copies of its
    ///    letter remain unconsumed, Absent otherwise
    ///
    /// Exact matches must be consumed before any Present mark is handed out,
    /// otherwise an early misplaced copy can steal a count that belongs to a
    /// later exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("error").unwrap();
    ///
    /// // R present, O absent (its only copy is the exact match), B absent,
    /// // O correct, T absent
    /// assert_eq!(Feedback::score(&guess, &secret).to_string(), "Y--G-");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches
        for ((mark, &g), &s) in marks.iter_mut().zip(guess.letters()).zip(secret.letters()) {
            if g == s {
                *mark = Mark::Correct;
                remaining[usize::from(g - b'A')] -= 1;
            }
        }

        // Second pass: misplaced letters from what is left
        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Mark::Correct {
                continue;
            }
            let count = &mut remaining[usize::from(g - b'A')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the positions carrying a given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Base-3 code in `0..243`, position `i` weighted by `3^i`
    #[must_use]
    pub fn code(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, mark| acc * 3 + mark.value())
    }

    /// Inverse of [`Feedback::code`]
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        if usize::from(code) >= Self::COUNT {
            return None;
        }
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut rest = code;
        for mark in &mut marks {
            *mark = Mark::from_value(rest % 3)?;
            rest /= 3;
        }
        Some(Self(marks))
    }

    /// Ternary digit string, e.g. `"20102"`
    #[must_use]
    pub fn to_digits(&self) -> String {
        self.0.iter().map(|m| char::from(b'0' + m.value())).collect()
    }

    /// Letter string, e.g. `"G-Y-G"`
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.0.iter().map(|m| m.letter()).collect()
    }

    /// Emoji string, e.g. `"🟩⬜🟨⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse any spelling of five marks
    ///
    /// Brackets, parentheses, commas and whitespace are ignored, so `"20102"`,
    /// `"[2,0,1,0,2]"`, `"(2, 0, 1, 0, 2)"`, `"G-Y-G"` and `"🟩⬜🟨⬜🟩"` all
    /// parse to the same value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !(c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | ',')))
            .map(|c| Mark::from_symbol(c).ok_or(FeedbackError::InvalidSymbol(c)))
            .collect::<Result<Vec<Mark>, _>>()?;

        let marks: [Mark; WORD_LEN] = marks
            .try_into()
            .map_err(|v: Vec<Mark>| FeedbackError::InvalidLength(v.len()))?;

        Ok(Self(marks))
    }
}

impl TryFrom<[u8; WORD_LEN]> for Feedback {
    type Error = FeedbackError;

    fn try_from(values: [u8; WORD_LEN]) -> Result<Self, Self::Error> {
        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, value) in marks.iter_mut().zip(values) {
            *mark = Mark::from_value(value).ok_or(FeedbackError::InvalidValue(value))?;
        }
        Ok(Self(marks))
    }
}

impl From<Feedback> for [u8; WORD_LEN] {
    fn from(feedback: Feedback) -> Self {
        feedback.0.map(Mark::value)
    }
}
