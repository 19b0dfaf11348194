//! Accepted guesses and solution words

use crate::core::Word;
use crate::error::DataError;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{NON_SOLUTIONS, SOLUTIONS};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::sync::Arc;

/// The two word lists a game is played with
///
/// Every solution is also an accepted guess.
#[derive(Debug, Clone)]
pub struct Dictionary {
    solutions: Arc<[Word]>,
    accepted: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from solution words and extra accepted guesses
    ///
    /// Solutions are sorted and de-duplicated.
    ///
    /// # Errors
    /// Returns [`DataError::NoSolutions`] if `solutions` is empty.
    pub fn new(mut solutions: Vec<Word>, extras: Vec<Word>) -> Result<Self, DataError> {
        if solutions.is_empty() {
            return Err(DataError::NoSolutions);
        }
        solutions.sort_unstable();
        solutions.dedup();

        let mut accepted: FxHashSet<Word> = extras.into_iter().collect();
        accepted.extend(solutions.iter().copied());

        log::debug!(
            "dictionary: {} solutions, {} accepted guesses",
            solutions.len(),
            accepted.len()
        );

        Ok(Self {
            solutions: solutions.into(),
            accepted,
        })
    }

    /// Lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(NON_SOLUTIONS))
            .expect("embedded solution list is not empty")
    }

    /// Read both lists from newline-delimited files
    ///
    /// # Errors
    /// Returns [`DataError`] if a file cannot be read or no solution words
    /// remain after parsing.
    pub fn load(solutions: &Path, extras: Option<&Path>) -> Result<Self, DataError> {
        let solutions = load_from_file(solutions)?;
        let extras = extras.map(load_from_file).transpose()?.unwrap_or_default();
        Self::new(solutions, extras)
    }

    /// Sorted solution words, shared
    #[must_use]
    pub const fn solutions(&self) -> &Arc<[Word]> {
        &self.solutions
    }

    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solutions.binary_search(word).is_ok()
    }

    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }
}
