//! Word list loading utilities
//!
//! Lists are newline-delimited. Blank lines are ignored and entries that are
//! not valid words are skipped with a warning.

use crate::core::Word;
use crate::error::DataError;
use std::fs;
use std::path::Path;

/// Parse newline-delimited words from text
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\nslate\ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].as_str(), "CRANE");
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping word list entry {line:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }

    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;

    let words = parse_words(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::loader::words_from_slice;
/// use wordle_coach::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
