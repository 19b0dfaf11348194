//! Word solving command
//!
//! Plays one secret by always submitting the active strategy's hint.

use crate::config::Settings;
use crate::core::{Feedback, Word, WordError};
use crate::game::{GameData, Round, RoundError, RoundStatus, SubmitError};
use crate::hints::{HintError, HintMode};
use thiserror::Error;

/// Why autoplay could not finish a round
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid secret")]
    Secret(#[from] WordError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("no hint available")]
    Hint(#[from] HintError),
    #[error("hint {guess} was refused")]
    Refused {
        guess: Word,
        #[source]
        source: SubmitError,
    },
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Word,
    pub strategy: HintMode,
    pub hard_mode: bool,
    pub status: RoundStatus,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates before and after this guess, for strategies that track them
    pub candidates: Option<(usize, usize)>,
}

/// Submit hints until the round ends
///
/// # Errors
/// Returns [`SolveError`] if the strategy runs out of hints or a hint is
/// refused by the round.
pub fn autoplay(round: &mut Round) -> Result<Vec<GuessStep>, SolveError> {
    let mut steps = Vec::with_capacity(round.max_attempts());

    while !round.status().is_over() {
        let guess = round.hint()?;
        let before = round.remaining_candidates();

        let submission = round
            .submit(guess.as_str())
            .map_err(|source| SolveError::Refused { guess, source })?;
        let after = round.remaining_candidates();

        steps.push(GuessStep {
            guess,
            feedback: submission.feedback,
            candidates: before.zip(after),
        });
    }

    Ok(steps)
}

/// Solve a specific word with the hints selected in `settings`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid word or not a solution word
/// - Hints are disabled or the strategy cannot follow the round
pub fn solve_word(
    secret: &str,
    data: &GameData,
    settings: &Settings,
) -> Result<SolveResult, SolveError> {
    if settings.hints == HintMode::None {
        return Err(HintError::Disabled.into());
    }

    let secret = Word::new(secret)?;
    let mut round = Round::new(
        secret,
        data.dictionary.clone(),
        settings,
        data.hint_source(settings.hints),
    )?;
    let steps = autoplay(&mut round)?;

    Ok(SolveResult {
        secret,
        strategy: settings.hints,
        hard_mode: settings.hard_mode,
        status: round.status(),
        steps,
    })
}
