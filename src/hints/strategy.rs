//! Hint strategies
//!
//! Defines the `HintStrategy` trait and the enum used to pick one per round.

use super::filter::CandidateHints;
use super::tree::{TreeError, TreeHints, TreeMode, TreeSet};
use crate::core::{Feedback, Word};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why no hint can be given
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// The observed feedback ruled out every solution word
    #[error("no candidate words remain")]
    NoCandidates,
    /// The player left the tree's line of play
    #[error("{played} is not the tree's guess {expected}; tree hints stop here")]
    OffTree { expected: Word, played: Word },
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("no {0} decision tree is loaded")]
    NoTree(TreeMode),
    #[error("hints are turned off")]
    Disabled,
}

/// A source of next-guess suggestions that follows one round
pub trait HintStrategy {
    /// Current suggested guess
    ///
    /// # Errors
    /// Returns [`HintError`] if the strategy has nothing consistent to offer.
    fn suggestion(&self) -> Result<Word, HintError>;

    /// Advance past an accepted guess and its feedback
    ///
    /// # Errors
    /// Returns [`HintError`] if the observation leaves the strategy without
    /// a valid suggestion.
    fn observe(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), HintError>;

    /// Return to the start of a round
    fn restart(&mut self);

    /// Number of words still possible, when the strategy tracks them
    fn remaining(&self) -> Option<usize>;
}

/// Which kind of hints a round offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HintMode {
    /// No hints
    None,
    /// Narrow the solution list by every feedback
    #[default]
    Candidates,
    /// Follow a precomputed decision tree
    Tree,
}

impl fmt::Display for HintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Candidates => f.write_str("candidates"),
            Self::Tree => f.write_str("tree"),
        }
    }
}

/// Enum wrapper for the hint strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum HintSession {
    Candidates(CandidateHints),
    Tree(TreeHints),
}

impl HintStrategy for HintSession {
    fn suggestion(&self) -> Result<Word, HintError> {
        match self {
            Self::Candidates(s) => s.suggestion(),
            Self::Tree(s) => s.suggestion(),
        }
    }

    fn observe(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), HintError> {
        match self {
            Self::Candidates(s) => s.observe(guess, feedback),
            Self::Tree(s) => s.observe(guess, feedback),
        }
    }

    fn restart(&mut self) {
        match self {
            Self::Candidates(s) => s.restart(),
            Self::Tree(s) => s.restart(),
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self {
            Self::Candidates(s) => s.remaining(),
            Self::Tree(s) => s.remaining(),
        }
    }
}

impl HintSession {
    #[must_use]
    pub const fn mode(&self) -> HintMode {
        match self {
            Self::Candidates(_) => HintMode::Candidates,
            Self::Tree(_) => HintMode::Tree,
        }
    }
}

impl From<CandidateHints> for HintSession {
    fn from(hints: CandidateHints) -> Self {
        Self::Candidates(hints)
    }
}

impl From<TreeHints> for HintSession {
    fn from(hints: TreeHints) -> Self {
        Self::Tree(hints)
    }
}

/// What a round needs to start hints for either rule set
#[derive(Debug, Clone, Default)]
pub enum HintSource {
    #[default]
    None,
    Candidates(Arc<[Word]>),
    Tree(TreeSet),
}

impl HintSource {
    #[must_use]
    pub const fn mode(&self) -> HintMode {
        match self {
            Self::None => HintMode::None,
            Self::Candidates(_) => HintMode::Candidates,
            Self::Tree(_) => HintMode::Tree,
        }
    }

    /// Fresh hint session for a round
    ///
    /// # Errors
    /// Returns [`HintError::NoTree`] if tree hints are selected but no tree
    /// exists for the requested rule set.
    pub fn start(&self, hard_mode: bool) -> Result<Option<HintSession>, HintError> {
        match self {
            Self::None => Ok(None),
            Self::Candidates(pool) => Ok(Some(CandidateHints::new(Arc::clone(pool)).into())),
            Self::Tree(trees) => {
                let mode = if hard_mode { TreeMode::Hard } else { TreeMode::Regular };
                let tree = trees.get(mode).ok_or(HintError::NoTree(mode))?;
                Ok(Some(TreeHints::new(tree).into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::{DecisionTree, TreeMode};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{SOLUTIONS, TREE_JSON};
    use std::sync::Arc;

    #[test]
    fn session_dispatches_to_candidates() {
        let pool: Arc<[Word]> = words_from_slice(SOLUTIONS).into();
        let session = HintSession::from(CandidateHints::new(Arc::clone(&pool)));

        assert_eq!(session.mode(), HintMode::Candidates);
        assert_eq!(session.remaining(), Some(pool.len()));
    }

    #[test]
    fn session_dispatches_to_tree() {
        let tree = DecisionTree::from_json(TREE_JSON, TreeMode::Regular).unwrap();
        let root = tree.root_guess();
        let session = HintSession::from(TreeHints::new(Arc::new(tree)));

        assert_eq!(session.mode(), HintMode::Tree);
        assert_eq!(session.suggestion(), Ok(root));
        assert_eq!(session.remaining(), None);
    }

    #[test]
    fn tree_and_candidate_hints_solve_the_same_secret() {
        let secret = Word::new("robot").unwrap();
        let pool: Arc<[Word]> = words_from_slice(SOLUTIONS).into();
        let tree = Arc::new(DecisionTree::from_json(TREE_JSON, TreeMode::Regular).unwrap());

        for mut session in [
            HintSession::from(CandidateHints::new(pool)),
            HintSession::from(TreeHints::new(tree)),
        ] {
            let mut solved = false;
            for _ in 0..6 {
                let guess = session.suggestion().unwrap();
                let feedback = Feedback::score(&guess, &secret);
                if feedback.is_perfect() {
                    solved = true;
                    break;
                }
                session.observe(&guess, &feedback).unwrap();
            }
            assert!(solved, "{:?} failed to solve {secret}", session.mode());
        }
    }

    #[test]
    fn source_picks_tree_by_rule_set() {
        let tree = DecisionTree::from_json(TREE_JSON, TreeMode::Regular).unwrap();
        let source = HintSource::Tree(TreeSet::new(Some(tree), None));

        assert!(matches!(source.start(false), Ok(Some(HintSession::Tree(_)))));
        assert_eq!(
            source.start(true).unwrap_err(),
            HintError::NoTree(TreeMode::Hard)
        );
        assert!(matches!(HintSource::None.start(false), Ok(None)));
    }

    #[test]
    fn hint_mode_display_matches_cli_names() {
        assert_eq!(HintMode::None.to_string(), "none");
        assert_eq!(HintMode::Candidates.to_string(), "candidates");
        assert_eq!(HintMode::Tree.to_string(), "tree");
    }
}
