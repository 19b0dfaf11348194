//! A single round of Wordle
//!
//! The round is a small state machine. It starts `InProgress`, and each
//! accepted guess is scored, folded into the hard mode constraints, appended
//! to the history and forwarded to the hint strategy. A rejected guess leaves
//! every piece of state untouched.

use super::Dictionary;
use crate::config::Settings;
use crate::core::{Feedback, Mark, Word, WordError};
use crate::hints::{HintError, HintSession, HintSource, HintStrategy};
use crate::rules::{HardConstraints, Violation};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Won => f.write_str("won"),
            Self::Lost => f.write_str("lost"),
        }
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the round is already {0}")]
    RoundOver(RoundStatus),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInDictionary(Word),
    #[error("hard mode: {0}")]
    HardMode(#[from] Violation),
}

/// Why a round could not be set up or reconfigured
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("hard mode can only change before the first guess")]
    ModeLocked,
    #[error("a round needs at least one attempt")]
    NoAttempts,
    #[error("{0} is not a solution word")]
    UnknownSecret(Word),
}

/// An accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub feedback: Feedback,
    pub status: RoundStatus,
    /// Set when the hint strategy could not follow this guess
    pub hint_error: Option<HintError>,
}

/// One secret, played to a win or until attempts run out
#[derive(Debug, Clone)]
pub struct Round {
    dictionary: Arc<Dictionary>,
    secret: Word,
    max_attempts: usize,
    hard_mode: bool,
    status: RoundStatus,
    history: Vec<Turn>,
    constraints: HardConstraints,
    source: HintSource,
    hints: Option<HintSession>,
    hint_fault: Option<HintError>,
}

impl Round {
    /// Start a round
    ///
    /// # Errors
    /// Returns [`RoundError`] if the secret is not a solution word or the
    /// settings allow no attempts.
    pub fn new(
        secret: Word,
        dictionary: Arc<Dictionary>,
        settings: &Settings,
        hints: HintSource,
    ) -> Result<Self, RoundError> {
        if settings.max_attempts == 0 {
            return Err(RoundError::NoAttempts);
        }

        let mut round = Self {
            dictionary,
            secret,
            max_attempts: settings.max_attempts,
            hard_mode: settings.hard_mode,
            status: RoundStatus::InProgress,
            history: Vec::with_capacity(settings.max_attempts),
            constraints: HardConstraints::new(),
            source: hints,
            hints: None,
            hint_fault: None,
        };
        round.reset(secret)?;
        Ok(round)
    }

    /// Play a guess
    ///
    /// Checks run in order: round over, length, characters, dictionary,
    /// hard mode. The text is taken as is, so surrounding whitespace counts
    /// towards the length. Hints are advanced only while the round continues.
    ///
    /// # Errors
    /// Returns [`SubmitError`] and leaves the round unchanged if the guess
    /// is refused.
    pub fn submit(&mut self, text: &str) -> Result<Submission, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::RoundOver(self.status));
        }

        let guess = Word::new(text)?;
        if !self.dictionary.is_accepted(&guess) {
            return Err(SubmitError::NotInDictionary(guess));
        }
        if self.hard_mode {
            self.constraints.validate(&guess)?;
        }

        let feedback = Feedback::score(&guess, &self.secret);
        self.constraints.record(&guess, &feedback);
        self.history.push(Turn { guess, feedback });
        log::debug!("guess {} {guess} -> {feedback}", self.history.len());

        if guess == self.secret {
            self.status = RoundStatus::Won;
        } else if self.history.len() >= self.max_attempts {
            self.status = RoundStatus::Lost;
        }
        if self.status.is_over() {
            log::info!(
                "round {} in {} guesses, secret {}",
                self.status,
                self.history.len(),
                self.secret
            );
        }

        let hint_error = self.forward_hint(&guess, &feedback);

        Ok(Submission {
            feedback,
            status: self.status,
            hint_error,
        })
    }

    fn forward_hint(&mut self, guess: &Word, feedback: &Feedback) -> Option<HintError> {
        if self.status.is_over() || self.hint_fault.is_some() {
            return None;
        }
        let hints = self.hints.as_mut()?;

        let error = hints.observe(guess, feedback).err()?;
        log::warn!("hint strategy stopped: {error}");
        self.hint_fault = Some(error.clone());
        Some(error)
    }

    /// Switch hard mode on or off
    ///
    /// Tree hints restart from the root of the tree for the new mode.
    ///
    /// # Errors
    /// Returns [`RoundError::ModeLocked`] once a guess has been accepted.
    pub fn set_hard_mode(&mut self, hard_mode: bool) -> Result<(), RoundError> {
        if !self.history.is_empty() {
            return Err(RoundError::ModeLocked);
        }
        if self.hard_mode != hard_mode {
            self.hard_mode = hard_mode;
            self.restart_hints();
        }
        Ok(())
    }

    /// Begin again with a new secret
    ///
    /// # Errors
    /// Returns [`RoundError::UnknownSecret`] if the secret is not a solution
    /// word. The round is unchanged in that case.
    pub fn reset(&mut self, secret: Word) -> Result<(), RoundError> {
        if !self.dictionary.is_solution(&secret) {
            return Err(RoundError::UnknownSecret(secret));
        }

        self.secret = secret;
        self.status = RoundStatus::InProgress;
        self.history.clear();
        self.constraints = HardConstraints::new();
        self.restart_hints();
        log::info!("new round, hard mode {}", self.hard_mode);
        Ok(())
    }

    fn restart_hints(&mut self) {
        match self.source.start(self.hard_mode) {
            Ok(hints) => {
                self.hints = hints;
                self.hint_fault = None;
            }
            Err(error) => {
                log::warn!("hints unavailable: {error}");
                self.hints = None;
                self.hint_fault = Some(error);
            }
        }
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn constraints(&self) -> &HardConstraints {
        &self.constraints
    }

    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// The word being guessed
    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Current hint suggestion
    ///
    /// # Errors
    /// Returns [`HintError::Disabled`] when the round has no hints, or the
    /// fault that stopped the hint strategy.
    pub fn hint(&self) -> Result<Word, HintError> {
        if let Some(fault) = &self.hint_fault {
            return Err(fault.clone());
        }
        self.hints
            .as_ref()
            .ok_or(HintError::Disabled)?
            .suggestion()
    }

    /// The error that stopped the hint strategy this round, if any
    #[must_use]
    pub const fn hint_fault(&self) -> Option<&HintError> {
        self.hint_fault.as_ref()
    }

    /// Solution words still possible, when the hint strategy tracks them
    #[must_use]
    pub fn remaining_candidates(&self) -> Option<usize> {
        self.hints.as_ref().and_then(HintStrategy::remaining)
    }

    #[must_use]
    pub const fn hint_source(&self) -> &HintSource {
        &self.source
    }

    /// Best mark seen so far for each guessed letter
    #[must_use]
    pub fn letter_states(&self) -> BTreeMap<char, Mark> {
        let mut states = BTreeMap::new();
        for turn in &self.history {
            for (&letter, &mark) in turn.guess.letters().iter().zip(turn.feedback.marks()) {
                states
                    .entry(char::from(letter))
                    .and_modify(|best: &mut Mark| *best = (*best).max(mark))
                    .or_insert(mark);
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Correct, Present};
    use crate::hints::{DecisionTree, TreeMode, TreeSet};
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(
            Dictionary::new(
                words_from_slice(&[
                    "crane", "trace", "error", "robot", "heart", "grain", "plant", "board",
                    "slate", "stone",
                ]),
                words_from_slice(&["roate", "moist", "fuzzy"]),
            )
            .unwrap(),
        )
    }

    fn round(secret: &str, settings: Settings) -> Round {
        Round::new(word(secret), dictionary(), &settings, HintSource::None).unwrap()
    }

    fn hinted_round(secret: &str, settings: Settings) -> Round {
        let dictionary = dictionary();
        let source = HintSource::Candidates(Arc::clone(dictionary.solutions()));
        Round::new(word(secret), dictionary, &settings, source).unwrap()
    }

    #[test]
    fn trace_against_crane() {
        let mut round = round("crane", Settings::default());

        let submission = round.submit("trace").unwrap();
        assert_eq!(
            submission.feedback,
            Feedback::new([Absent, Correct, Correct, Present, Correct])
        );
        assert_eq!(submission.status, RoundStatus::InProgress);
        assert_eq!(round.attempt(), 1);
    }

    #[test]
    fn robot_against_error() {
        let mut round = round("error", Settings::default());

        let submission = round.submit("robot").unwrap();
        assert_eq!(
            submission.feedback,
            Feedback::new([Present, Absent, Absent, Correct, Absent])
        );
    }

    #[test]
    fn padded_guess_is_rejected() {
        let mut round = round("crane", Settings::default());

        assert_eq!(
            round.submit("  crane\t"),
            Err(SubmitError::InvalidWord(WordError::InvalidLength(8)))
        );
        assert_eq!(round.attempt(), 0);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut round = round("crane", Settings::default());

        round.submit("trace").unwrap();
        let submission = round.submit("CRANE").unwrap();
        assert_eq!(submission.status, RoundStatus::Won);
        assert!(submission.feedback.is_perfect());
        assert_eq!(round.submit("crane"), Err(SubmitError::RoundOver(RoundStatus::Won)));
    }

    #[test]
    fn round_is_lost_after_last_attempt() {
        let mut round = round("crane", Settings::default());
        let guesses = ["trace", "error", "robot", "heart", "grain", "plant"];

        for (i, guess) in guesses.iter().enumerate() {
            let submission = round.submit(guess).unwrap();
            let expected = if i + 1 == guesses.len() {
                RoundStatus::Lost
            } else {
                RoundStatus::InProgress
            };
            assert_eq!(submission.status, expected, "after {guess}");
        }

        assert_eq!(round.remaining_attempts(), 0);
        assert_eq!(round.submit("crane"), Err(SubmitError::RoundOver(RoundStatus::Lost)));
    }

    #[test]
    fn rejections_follow_check_order_and_leave_state() {
        let mut round = round("crane", Settings::default().with_hard_mode(true));
        round.submit("grain").unwrap();
        let before = (round.attempt(), round.constraints().clone());

        assert_eq!(
            round.submit("cranes"),
            Err(SubmitError::InvalidWord(WordError::InvalidLength(6)))
        );
        assert_eq!(
            round.submit("cr4ne"),
            Err(SubmitError::InvalidWord(WordError::InvalidCharacters))
        );
        assert_eq!(
            round.submit("zzzzz"),
            Err(SubmitError::NotInDictionary(word("zzzzz")))
        );
        assert!(matches!(round.submit("moist"), Err(SubmitError::HardMode(_))));

        assert_eq!((round.attempt(), round.constraints().clone()), before);
    }

    #[test]
    fn hard_mode_rejects_missing_yellow() {
        // GRAIN vs HEART: R present at position 2
        let mut round = round("heart", Settings::default().with_hard_mode(true));
        round.submit("grain").unwrap();

        assert_eq!(
            round.submit("plant"),
            Err(SubmitError::HardMode(Violation::MissingYellow { letter: 'R' }))
        );
        assert!(round.submit("board").is_ok());
    }

    #[test]
    fn normal_mode_ignores_constraints() {
        let mut round = round("heart", Settings::default());
        round.submit("grain").unwrap();
        assert!(round.submit("plant").is_ok());
    }

    #[test]
    fn hard_mode_locks_after_first_guess() {
        let mut round = round("heart", Settings::default());

        round.set_hard_mode(true).unwrap();
        assert!(round.is_hard_mode());

        round.submit("grain").unwrap();
        assert_eq!(round.set_hard_mode(false), Err(RoundError::ModeLocked));
    }

    #[test]
    fn reset_clears_round() {
        let mut round = round("crane", Settings::default());
        round.submit("crane").unwrap();

        round.reset(word("stone")).unwrap();
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert!(round.history().is_empty());
        assert!(round.constraints().is_empty());
        assert_eq!(round.secret(), word("stone"));

        assert_eq!(
            round.reset(word("roate")),
            Err(RoundError::UnknownSecret(word("roate")))
        );
        assert_eq!(round.secret(), word("stone"));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let result = Round::new(
            word("crane"),
            dictionary(),
            &Settings::default().with_max_attempts(0),
            HintSource::None,
        );
        assert!(matches!(result, Err(RoundError::NoAttempts)));
    }

    #[test]
    fn candidate_hints_track_guesses() {
        let mut round = hinted_round("stone", Settings::default());
        assert_eq!(round.remaining_candidates(), Some(10));

        round.submit("crane").unwrap();
        assert_eq!(round.hint(), Ok(word("stone")));
        assert_eq!(round.remaining_candidates(), Some(1));
    }

    #[test]
    fn hints_not_forwarded_after_round_ends() {
        let mut round = hinted_round("stone", Settings::default());

        let submission = round.submit("stone").unwrap();
        assert_eq!(submission.hint_error, None);
        assert_eq!(round.remaining_candidates(), Some(10));
    }

    #[test]
    fn disabled_hints_report_so() {
        let round = round("crane", Settings::default());
        assert_eq!(round.hint(), Err(HintError::Disabled));
    }

    #[test]
    fn off_tree_guess_is_recorded_without_rejecting() {
        let tree_json = r#"{"root": 0, "nodes": {"0": {"guess": "roate"}}}"#;
        let tree = DecisionTree::from_json(tree_json, TreeMode::Regular).unwrap();
        let source = HintSource::Tree(TreeSet::new(Some(tree), None));
        let mut round =
            Round::new(word("stone"), dictionary(), &Settings::default(), source).unwrap();

        assert_eq!(round.hint(), Ok(word("roate")));
        let submission = round.submit("crane").unwrap();

        let expected = HintError::OffTree {
            expected: word("roate"),
            played: word("crane"),
        };
        assert_eq!(submission.hint_error, Some(expected.clone()));
        assert_eq!(round.hint_fault(), Some(&expected));
        assert_eq!(round.attempt(), 1);
    }

    #[test]
    fn missing_tree_for_mode_is_a_fault() {
        let tree_json = r#"{"root": 0, "nodes": {"0": {"guess": "roate"}}}"#;
        let tree = DecisionTree::from_json(tree_json, TreeMode::Regular).unwrap();
        let source = HintSource::Tree(TreeSet::new(Some(tree), None));
        let mut round =
            Round::new(word("stone"), dictionary(), &Settings::default(), source).unwrap();

        round.set_hard_mode(true).unwrap();
        assert_eq!(round.hint(), Err(HintError::NoTree(TreeMode::Hard)));

        round.set_hard_mode(false).unwrap();
        assert_eq!(round.hint(), Ok(word("roate")));
    }

    #[test]
    fn letter_states_keep_best_mark() {
        let mut round = round("heart", Settings::default());
        round.submit("grain").unwrap();
        round.submit("board").unwrap();

        let states = round.letter_states();
        assert_eq!(states[&'G'], Absent);
        // Present in GRAIN, Correct in BOARD
        assert_eq!(states[&'R'], Correct);
        assert_eq!(states[&'A'], Correct);
    }
}
