//! Score one guess against one secret

use crate::core::{Feedback, Word, WordError};

/// A scored pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in a word list.
///
/// # Errors
/// Returns [`WordError`] if either input is not a five letter word.
pub fn score_pair(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;

    Ok(ScoreResult {
        guess,
        secret,
        feedback: Feedback::score(&guess, &secret),
    })
}
