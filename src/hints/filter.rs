//! Candidate filtering
//!
//! A candidate survives a guess only if scoring the guess against it
//! reproduces the observed feedback exactly. This is sound: the secret
//! always reproduces its own feedback, so it is never filtered out.

use super::HintError;
use super::strategy::HintStrategy;
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use std::sync::Arc;

/// Pools at least this large are narrowed in parallel
const PARALLEL_THRESHOLD: usize = 1024;

/// Keep the candidates that would have produced `feedback` for `guess`
///
/// Order is preserved.
///
/// # Examples
/// ```
/// use wordle_coach::core::{Feedback, Word};
/// use wordle_coach::hints::narrow;
///
/// let words: Vec<Word> = ["crane", "irate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("irate").unwrap();
/// let feedback = Feedback::score(&guess, &words[0]);
///
/// assert_eq!(narrow(&words, &guess, &feedback), vec![words[0]]);
/// ```
#[must_use]
pub fn narrow(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let keep = |candidate: &&Word| Feedback::score(guess, candidate) == *feedback;

    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates.par_iter().filter(keep).copied().collect()
    } else {
        candidates.iter().filter(keep).copied().collect()
    }
}

/// Hints drawn from the words still consistent with the round so far
///
/// The suggestion is always the alphabetically first remaining candidate.
#[derive(Debug, Clone)]
pub struct CandidateHints {
    pool: Arc<[Word]>,
    candidates: Vec<Word>,
}

impl CandidateHints {
    /// Start from a pool of solution words
    #[must_use]
    pub fn new(pool: Arc<[Word]>) -> Self {
        let mut candidates = pool.to_vec();
        candidates.sort_unstable();
        candidates.dedup();
        Self { pool, candidates }
    }

    /// Words still consistent with every observed feedback, sorted
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}

impl HintStrategy for CandidateHints {
    fn suggestion(&self) -> Result<Word, HintError> {
        self.candidates.first().copied().ok_or(HintError::NoCandidates)
    }

    fn observe(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), HintError> {
        let before = self.candidates.len();
        self.candidates = narrow(&self.candidates, guess, feedback);
        log::debug!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            return Err(HintError::NoCandidates);
        }
        Ok(())
    }

    fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.pool));
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.candidates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn narrow_keeps_exact_rescoring_matches() {
        let pool = words(&["irate", "crate", "grate", "slate", "crane"]);
        let guess = word("crane");
        let feedback = Feedback::score(&guess, &word("grate"));

        let remaining = narrow(&pool, &guess, &feedback);
        assert_eq!(remaining, words(&["irate", "grate"]));
    }

    #[test]
    fn narrow_never_drops_the_secret() {
        let pool = words_from_slice(SOLUTIONS);
        let guesses = words(&["roate", "llama", "eerie", "fuzzy"]);

        for secret in pool.iter().step_by(7) {
            for guess in &guesses {
                let feedback = Feedback::score(guess, secret);
                let remaining = narrow(&pool, guess, &feedback);
                assert!(remaining.contains(secret), "{guess} dropped {secret}");
            }
        }
    }

    #[test]
    fn narrow_is_idempotent() {
        let pool = words_from_slice(SOLUTIONS);
        let guess = word("slate");
        let feedback = Feedback::score(&guess, &word("crane"));

        let once = narrow(&pool, &guess, &feedback);
        let twice = narrow(&once, &guess, &feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn narrow_parallel_matches_sequential_order() {
        let mut pool = words_from_slice(SOLUTIONS);
        while pool.len() < PARALLEL_THRESHOLD {
            pool.extend_from_within(..);
        }
        let guess = word("roate");
        let feedback = Feedback::score(&guess, &word("crane"));

        let expected: Vec<Word> = pool
            .iter()
            .filter(|w| Feedback::score(&guess, w) == feedback)
            .copied()
            .collect();
        assert_eq!(narrow(&pool, &guess, &feedback), expected);
    }

    #[test]
    fn suggestion_is_first_sorted_candidate() {
        let hints = CandidateHints::new(words(&["slate", "crane", "irate", "crane"]).into());

        assert_eq!(hints.candidates(), words(&["crane", "irate", "slate"]).as_slice());
        assert_eq!(hints.suggestion(), Ok(word("crane")));
        assert_eq!(hints.remaining(), Some(3));
    }

    #[test]
    fn observe_narrows_and_restart_restores() {
        let mut hints = CandidateHints::new(words(&["crane", "irate", "slate", "grate"]).into());
        let guess = word("crane");
        let feedback = Feedback::score(&guess, &word("slate"));

        hints.observe(&guess, &feedback).unwrap();
        assert_eq!(hints.candidates(), words(&["slate"]).as_slice());

        hints.restart();
        assert_eq!(hints.remaining(), Some(4));
    }

    #[test]
    fn empty_candidate_set_is_reported() {
        let mut hints = CandidateHints::new(words(&["crane", "slate"]).into());

        let result = hints.observe(&word("zzzzz"), &Feedback::PERFECT);
        assert_eq!(result, Err(HintError::NoCandidates));
        assert_eq!(hints.suggestion(), Err(HintError::NoCandidates));
    }
}
