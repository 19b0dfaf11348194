//! Embedded word lists and decision trees
//!
//! Data compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/non_solutions.rs"));

/// Decision tree for regular play over the embedded lists
pub const TREE_JSON: &str = include_str!("../../data/tree.json");

/// Decision tree for hard mode over the embedded lists
pub const HARD_TREE_JSON: &str = include_str!("../../data/tree_hard.json");
