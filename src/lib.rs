//! Wordle Coach
//!
//! A Wordle engine with duplicate-safe scoring, hard mode, and two kinds of
//! hints: narrowing the solution list, or following a precomputed decision
//! tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_coach::core::{Feedback, Word};
//!
//! let guess = Word::new("robot").unwrap();
//! let secret = Word::new("error").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.to_digits(), "10020");
//! ```

// Core domain types
pub mod core;

// Hard mode rules
pub mod rules;

// Hint strategies
pub mod hints;

// Rounds and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Settings, errors and logging
pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
