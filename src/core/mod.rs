//! Core domain types for Wordle
//!
//! Words and feedback. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LEN, Word, WordError};
