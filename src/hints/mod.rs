//! Next-guess hints
//!
//! Two independent strategies: narrowing the solution list by observed
//! feedback, or walking a precomputed decision tree.

mod filter;
mod strategy;
mod tree;

pub use filter::{CandidateHints, narrow};
pub use strategy::{HintError, HintMode, HintSession, HintSource, HintStrategy};
pub use tree::{
    DecisionTree, NodeId, TreeError, TreeHints, TreeMode, TreeNode, TreeReport, TreeSet,
};
