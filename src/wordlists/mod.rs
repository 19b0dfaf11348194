//! Word lists for Wordle
//!
//! Provides embedded word lists and decision trees compiled into the binary,
//! plus loaders for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{
    HARD_TREE_JSON, NON_SOLUTIONS, NON_SOLUTIONS_COUNT, SOLUTIONS, SOLUTIONS_COUNT, TREE_JSON,
};
