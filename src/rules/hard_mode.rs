//! Hard mode constraints
//!
//! Every revealed hint must be reused: a letter marked Correct stays pinned to
//! its position and a letter marked Present must appear somewhere in every
//! later guess. Constraints only ever accumulate within a round.

use crate::core::{Feedback, Mark, WORD_LEN, Word};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// A guess that breaks the accumulated hard mode constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// `position` is 1-based
    #[error("letter {letter} must be in position {position}")]
    MissingGreen { letter: char, position: usize },
    #[error("guess must contain {letter}")]
    MissingYellow { letter: char },
}

/// Constraints accumulated from the feedback of accepted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardConstraints {
    greens: [Option<u8>; WORD_LEN],
    yellows: BTreeSet<u8>,
}

impl HardConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a guess against the constraints
    ///
    /// Greens are checked first in position order, then yellows in
    /// alphabetical order. The first failure is reported.
    ///
    /// # Errors
    /// Returns the first [`Violation`] found.
    pub fn validate(&self, guess: &Word) -> Result<(), Violation> {
        for (i, green) in self.greens.iter().enumerate() {
            if let Some(letter) = *green
                && guess.letter_at(i) != letter
            {
                return Err(Violation::MissingGreen {
                    letter: char::from(letter),
                    position: i + 1,
                });
            }
        }

        if let Some(&letter) = self.yellows.iter().find(|&&l| !guess.contains(l)) {
            return Err(Violation::MissingYellow {
                letter: char::from(letter),
            });
        }

        Ok(())
    }

    /// Fold the feedback of an accepted guess into the constraints
    ///
    /// Correct positions pin their letter, Present letters join the yellow
    /// set. Nothing is ever removed, so a letter that later turns Correct
    /// stays in the yellow set as well.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => self.greens[i] = Some(letter),
                Mark::Present => {
                    self.yellows.insert(letter);
                }
                Mark::Absent => {}
            }
        }
    }

    /// Pinned letter per position
    #[must_use]
    pub const fn greens(&self) -> &[Option<u8>; WORD_LEN] {
        &self.greens
    }

    /// Letters that must appear somewhere
    #[must_use]
    pub const fn yellows(&self) -> &BTreeSet<u8> {
        &self.yellows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.iter().all(Option::is_none) && self.yellows.is_empty()
    }

    /// True if every constraint in `other` is also present here
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.greens
            .iter()
            .zip(&other.greens)
            .all(|(mine, theirs)| theirs.is_none() || mine == theirs)
            && self.yellows.is_superset(&other.yellows)
    }
}

impl fmt::Display for HardConstraints {
    /// Compact form, e.g. `_R__E +AC`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for green in &self.greens {
            write!(f, "{}", green.map_or('_', char::from))?;
        }
        if !self.yellows.is_empty() {
            f.write_str(" +")?;
            for &letter in &self.yellows {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}
