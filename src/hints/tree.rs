//! Decision tree navigation
//!
//! A decision tree is a pre-solved strategy: each node names a guess and maps
//! every feedback that guess can produce to the node holding the next guess.
//! Trees are static data. They are validated once when loaded and shared
//! read-only between rounds.

use super::HintError;
use super::strategy::HintStrategy;
use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::error::DataError;
use crate::rules::{HardConstraints, Violation};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Identifier of a node within one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| TreeError::InvalidNodeId(s.to_string()))
    }
}

/// Which rule set a tree was solved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeMode {
    #[default]
    Regular,
    Hard,
}

impl fmt::Display for TreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => f.write_str("regular"),
            Self::Hard => f.write_str("hard"),
        }
    }
}

/// Malformed or inconsistent tree data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {node} has no successor for feedback {feedback}")]
    MissingSuccessor { node: NodeId, feedback: Feedback },
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("root node {0} does not exist")]
    MissingRoot(NodeId),
    #[error("node {node} points to missing node {target}")]
    DanglingSuccessor { node: NodeId, target: NodeId },
    #[error("node {node} has a successor for the winning feedback")]
    PerfectSuccessor { node: NodeId },
    #[error("invalid node id {0:?}")]
    InvalidNodeId(String),
    #[error("node {node} has invalid guess {text:?}")]
    InvalidGuess {
        node: String,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("invalid successor key {key:?}")]
    InvalidKey {
        key: String,
        #[source]
        source: FeedbackError,
    },
    #[error("node {node} has two successors for feedback {feedback}")]
    DuplicateKey { node: NodeId, feedback: Feedback },
    #[error("node {0} is defined twice")]
    DuplicateNode(NodeId),
    #[error("tree is declared {declared} but loaded as {expected}")]
    ModeMismatch {
        declared: TreeMode,
        expected: TreeMode,
    },
    #[error("tree loops without solving {secret}")]
    Cycle { secret: Word },
    #[error("node {node} guesses {guess}, breaking hard mode: {violation}")]
    HardModeViolation {
        node: NodeId,
        guess: Word,
        violation: Violation,
    },
}

/// One decision point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub guess: Word,
    pub successors: FxHashMap<Feedback, NodeId>,
}

/// Summary of playing every secret through a tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    pub mode: TreeMode,
    pub secrets: usize,
    pub vertices: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub max: usize,
    /// Guesses needed -> number of secrets
    pub distribution: BTreeMap<usize, usize>,
}

impl TreeReport {
    fn from_depths(mode: TreeMode, vertices: usize, depths: &[usize]) -> Self {
        let mut distribution = BTreeMap::new();
        for &depth in depths {
            *distribution.entry(depth).or_insert(0) += 1;
        }

        let (mean, std_dev) = if depths.is_empty() {
            (0.0, 0.0)
        } else {
            let n = depths.len() as f64;
            let mean = depths.iter().sum::<usize>() as f64 / n;
            let variance = depths
                .iter()
                .map(|&d| (d as f64 - mean).powi(2))
                .sum::<f64>()
                / n;
            (mean, variance.sqrt())
        };

        Self {
            mode,
            secrets: depths.len(),
            vertices,
            mean,
            std_dev,
            max: depths.iter().copied().max().unwrap_or(0),
            distribution,
        }
    }

    /// Secrets that need more than `limit` guesses
    #[must_use]
    pub fn exceeding(&self, limit: usize) -> usize {
        self.distribution.range(limit + 1..).map(|(_, count)| count).sum()
    }
}

/// A validated decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    mode: TreeMode,
    root: NodeId,
    nodes: FxHashMap<NodeId, TreeNode>,
}

impl DecisionTree {
    /// Build a tree from parts, checking its structure
    ///
    /// # Errors
    /// Returns [`TreeError`] if the root or a successor target is missing,
    /// or a node has a successor for the winning feedback.
    pub fn new(
        mode: TreeMode,
        root: NodeId,
        nodes: FxHashMap<NodeId, TreeNode>,
    ) -> Result<Self, TreeError> {
        if !nodes.contains_key(&root) {
            return Err(TreeError::MissingRoot(root));
        }

        for (&id, node) in &nodes {
            if node.successors.contains_key(&Feedback::PERFECT) {
                return Err(TreeError::PerfectSuccessor { node: id });
            }
            if let Some(&target) = node.successors.values().find(|t| !nodes.contains_key(t)) {
                return Err(TreeError::DanglingSuccessor { node: id, target });
            }
        }

        Ok(Self { mode, root, nodes })
    }

    /// Parse a tree from JSON
    ///
    /// Three layouts are accepted and converted once here:
    /// - `{"mode":"hard","root":0,"nodes":{"0":{"guess":"SALET","successors":{"20102":1}}}}`
    /// - the same with `"word"` in place of `"guess"` and keys like `"2,0,1,0,2"`
    /// - `{"root":0,"vertices":[[0,"salet"]],"successors":{"(0, (2, 0, 1, 0, 2))":1}}`
    ///
    /// # Errors
    /// Returns [`DataError::Json`] for malformed JSON and [`DataError::Tree`]
    /// for content that does not form a valid tree of the expected mode.
    pub fn from_json(json: &str, mode: TreeMode) -> Result<Self, DataError> {
        let raw: RawTree = serde_json::from_str(json)?;
        let tree = raw.into_tree(mode)?;
        log::info!(
            "loaded {} tree with {} nodes, root guess {}",
            tree.mode,
            tree.nodes.len(),
            tree.root_guess()
        );
        Ok(tree)
    }

    /// Load a tree from a JSON file
    ///
    /// # Errors
    /// Returns [`DataError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P, mode: TreeMode) -> Result<Self, DataError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_json(&json, mode)
    }

    /// Canonical JSON form with node ids and keys in ascending order
    ///
    /// # Errors
    /// Returns the serializer error, which cannot occur for valid trees.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let nodes = self
            .nodes
            .iter()
            .map(|(id, node)| {
                let successors = node
                    .successors
                    .iter()
                    .map(|(feedback, target)| (feedback.to_digits(), target.0))
                    .collect();
                (
                    id.0,
                    CanonicalNode {
                        guess: node.guess,
                        successors,
                    },
                )
            })
            .collect();

        serde_json::to_string_pretty(&CanonicalTree {
            mode: self.mode,
            root: self.root.0,
            nodes,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> TreeMode {
        self.mode
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Opening guess
    #[must_use]
    pub fn root_guess(&self) -> Word {
        self.nodes[&self.root].guess
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advance through the tree
    ///
    /// With no cursor or no feedback the root is returned. Otherwise the
    /// successor of `cursor` for exactly `feedback` is returned.
    ///
    /// # Errors
    /// Returns [`TreeError::MissingSuccessor`] if the tree has no branch for
    /// the feedback and [`TreeError::UnknownNode`] if the cursor is not a node
    /// of this tree.
    pub fn step(
        &self,
        cursor: Option<NodeId>,
        feedback: Option<&Feedback>,
    ) -> Result<(Word, NodeId), TreeError> {
        let (Some(cursor), Some(feedback)) = (cursor, feedback) else {
            return Ok((self.root_guess(), self.root));
        };

        let node = self
            .nodes
            .get(&cursor)
            .ok_or(TreeError::UnknownNode(cursor))?;
        let &next = node
            .successors
            .get(feedback)
            .ok_or(TreeError::MissingSuccessor {
                node: cursor,
                feedback: *feedback,
            })?;

        Ok((self.nodes[&next].guess, next))
    }

    /// Follow the tree against one secret, returning every guess made
    ///
    /// For a hard mode tree each guess is also checked against the
    /// constraints revealed so far.
    ///
    /// # Errors
    /// Returns [`TreeError`] on a missing branch, a loop, or a hard mode
    /// violation.
    pub fn play(&self, secret: &Word) -> Result<Vec<Word>, TreeError> {
        let mut guesses = Vec::new();
        let mut constraints = HardConstraints::new();
        let (mut guess, mut cursor) = self.step(None, None)?;

        loop {
            if self.mode == TreeMode::Hard {
                constraints
                    .validate(&guess)
                    .map_err(|violation| TreeError::HardModeViolation {
                        node: cursor,
                        guess,
                        violation,
                    })?;
            }
            guesses.push(guess);

            let feedback = Feedback::score(&guess, secret);
            if feedback.is_perfect() {
                return Ok(guesses);
            }
            if guesses.len() > self.nodes.len() {
                return Err(TreeError::Cycle { secret: *secret });
            }

            constraints.record(&guess, &feedback);
            (guess, cursor) = self.step(Some(cursor), Some(&feedback))?;
        }
    }

    /// Play every secret through the tree in parallel
    ///
    /// # Errors
    /// Returns the first [`TreeError`] encountered.
    pub fn evaluate(&self, secrets: &[Word]) -> Result<TreeReport, TreeError> {
        let depths = secrets
            .par_iter()
            .map(|secret| self.play(secret).map(|guesses| guesses.len()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TreeReport::from_depths(self.mode, self.nodes.len(), &depths))
    }
}

/// The available trees, at most one per mode
#[derive(Debug, Clone, Default)]
pub struct TreeSet {
    regular: Option<Arc<DecisionTree>>,
    hard: Option<Arc<DecisionTree>>,
}

impl TreeSet {
    #[must_use]
    pub fn new(regular: Option<DecisionTree>, hard: Option<DecisionTree>) -> Self {
        Self {
            regular: regular.map(Arc::new),
            hard: hard.map(Arc::new),
        }
    }

    /// Tree for hard or regular play
    #[must_use]
    pub fn get(&self, mode: TreeMode) -> Option<Arc<DecisionTree>> {
        match mode {
            TreeMode::Regular => self.regular.clone(),
            TreeMode::Hard => self.hard.clone(),
        }
    }

    #[must_use]
    pub fn for_hard_mode(&self, hard: bool) -> Option<Arc<DecisionTree>> {
        self.get(if hard { TreeMode::Hard } else { TreeMode::Regular })
    }
}

/// Hints that follow a decision tree through one round
#[derive(Debug, Clone)]
pub struct TreeHints {
    tree: Arc<DecisionTree>,
    guess: Word,
    cursor: NodeId,
}

impl TreeHints {
    #[must_use]
    pub fn new(tree: Arc<DecisionTree>) -> Self {
        let guess = tree.root_guess();
        let cursor = tree.root();
        Self {
            tree,
            guess,
            cursor,
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> NodeId {
        self.cursor
    }

    #[must_use]
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}

impl HintStrategy for TreeHints {
    fn suggestion(&self) -> Result<Word, HintError> {
        Ok(self.guess)
    }

    fn observe(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), HintError> {
        if *guess != self.guess {
            return Err(HintError::OffTree {
                expected: self.guess,
                played: *guess,
            });
        }

        let (next, cursor) = self.tree.step(Some(self.cursor), Some(feedback))?;
        log::debug!("tree {} -> {cursor} ({next}) on {feedback}", self.cursor);
        self.guess = next;
        self.cursor = cursor;
        Ok(())
    }

    fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.tree));
    }

    fn remaining(&self) -> Option<usize> {
        None
    }
}

#[derive(Serialize)]
struct CanonicalTree {
    mode: TreeMode,
    root: u32,
    nodes: BTreeMap<u32, CanonicalNode>,
}

#[derive(Serialize)]
struct CanonicalNode {
    guess: Word,
    successors: BTreeMap<String, u32>,
}

/// Node ids appear both as numbers and as strings in the wild
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

impl RawId {
    fn parse(self) -> Result<NodeId, TreeError> {
        match self {
            Self::Number(n) => Ok(NodeId(n)),
            Self::Text(s) => s.parse(),
        }
    }
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(alias = "word")]
    guess: String,
    #[serde(default)]
    successors: BTreeMap<String, RawId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTree {
    Nodes {
        #[serde(default)]
        mode: Option<TreeMode>,
        root: RawId,
        nodes: BTreeMap<String, RawNode>,
    },
    Vertices {
        #[serde(default)]
        mode: Option<TreeMode>,
        root: RawId,
        vertices: Vec<(RawId, String)>,
        successors: BTreeMap<String, RawId>,
    },
}

fn parse_guess(node: &str, text: &str) -> Result<Word, TreeError> {
    Word::new(text).map_err(|source| TreeError::InvalidGuess {
        node: node.to_string(),
        text: text.to_string(),
        source,
    })
}

fn parse_feedback(key: &str) -> Result<Feedback, TreeError> {
    key.parse().map_err(|source| TreeError::InvalidKey {
        key: key.to_string(),
        source,
    })
}

/// Split a legacy `"(node, (2, 0, 1, 0, 2))"` key
fn parse_vertex_key(key: &str) -> Result<(NodeId, Feedback), TreeError> {
    let inner = key.trim().trim_start_matches('(');
    let (node, feedback) = inner
        .split_once(',')
        .ok_or_else(|| TreeError::InvalidNodeId(key.to_string()))?;
    Ok((node.parse()?, parse_feedback(feedback)?))
}

fn insert_successor(
    node: &mut TreeNode,
    id: NodeId,
    feedback: Feedback,
    target: NodeId,
) -> Result<(), TreeError> {
    if node.successors.insert(feedback, target).is_some() {
        return Err(TreeError::DuplicateKey { node: id, feedback });
    }
    Ok(())
}

impl RawTree {
    fn into_tree(self, expected: TreeMode) -> Result<DecisionTree, TreeError> {
        let (declared, root, nodes) = match self {
            Self::Nodes { mode, root, nodes } => (mode, root, Self::convert_nodes(nodes)?),
            Self::Vertices {
                mode,
                root,
                vertices,
                successors,
            } => (mode, root, Self::convert_vertices(vertices, successors)?),
        };

        if let Some(declared) = declared
            && declared != expected
        {
            return Err(TreeError::ModeMismatch { declared, expected });
        }

        DecisionTree::new(expected, root.parse()?, nodes)
    }

    fn convert_nodes(
        raw: BTreeMap<String, RawNode>,
    ) -> Result<FxHashMap<NodeId, TreeNode>, TreeError> {
        let mut nodes = FxHashMap::default();

        for (key, raw_node) in raw {
            let id: NodeId = key.parse()?;
            let mut node = TreeNode {
                guess: parse_guess(&key, &raw_node.guess)?,
                successors: FxHashMap::default(),
            };
            for (feedback, target) in raw_node.successors {
                insert_successor(&mut node, id, parse_feedback(&feedback)?, target.parse()?)?;
            }
            if nodes.insert(id, node).is_some() {
                return Err(TreeError::DuplicateNode(id));
            }
        }

        Ok(nodes)
    }

    fn convert_vertices(
        vertices: Vec<(RawId, String)>,
        successors: BTreeMap<String, RawId>,
    ) -> Result<FxHashMap<NodeId, TreeNode>, TreeError> {
        let mut nodes = FxHashMap::default();

        for (id, guess) in vertices {
            let id = id.parse()?;
            let node = TreeNode {
                guess: parse_guess(&id.to_string(), &guess)?,
                successors: FxHashMap::default(),
            };
            if nodes.insert(id, node).is_some() {
                return Err(TreeError::DuplicateNode(id));
            }
        }

        for (key, target) in successors {
            let (id, feedback) = parse_vertex_key(&key)?;
            let node = nodes.get_mut(&id).ok_or(TreeError::UnknownNode(id))?;
            insert_successor(node, id, feedback, target.parse()?)?;
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{HARD_TREE_JSON, SOLUTIONS, TREE_JSON};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        text.parse().unwrap()
    }

    /// Three-word tree: open with CRANE, then branch on its feedback
    const SMALL_TREE: &str = r#"{
        "root": 0,
        "nodes": {
            "0": {"guess": "crane", "successors": {"00022": 1, "02222": 2}},
            "1": {"guess": "stone", "successors": {}},
            "2": {"guess": "brane", "successors": {}}
        }
    }"#;

    fn small_tree() -> DecisionTree {
        DecisionTree::from_json(SMALL_TREE, TreeMode::Regular).unwrap()
    }

    #[test]
    fn step_without_cursor_returns_root() {
        let tree = small_tree();

        assert_eq!(tree.step(None, None), Ok((word("crane"), NodeId(0))));
        assert_eq!(
            tree.step(Some(NodeId(1)), None),
            Ok((word("crane"), NodeId(0)))
        );
    }

    #[test]
    fn step_follows_exact_feedback() {
        let tree = small_tree();

        let next = tree.step(Some(NodeId(0)), Some(&feedback("00022")));
        assert_eq!(next, Ok((word("stone"), NodeId(1))));
    }

    #[test]
    fn missing_successor_is_distinct_error() {
        let tree = small_tree();
        let observed = feedback("00000");

        assert_eq!(
            tree.step(Some(NodeId(0)), Some(&observed)),
            Err(TreeError::MissingSuccessor {
                node: NodeId(0),
                feedback: observed,
            })
        );
    }

    #[test]
    fn unknown_cursor_is_rejected() {
        let tree = small_tree();
        assert_eq!(
            tree.step(Some(NodeId(9)), Some(&feedback("00000"))),
            Err(TreeError::UnknownNode(NodeId(9)))
        );
    }

    #[test]
    fn hint_js_layout_is_accepted() {
        let json = r#"{
            "root": "0",
            "nodes": {
                "0": {"word": "crane", "successors": {"0,0,0,2,2": "1", "0,2,2,2,2": "2"}},
                "1": {"word": "stone", "successors": {}},
                "2": {"word": "brane", "successors": {}}
            }
        }"#;

        let tree = DecisionTree::from_json(json, TreeMode::Regular).unwrap();
        assert_eq!(tree, small_tree());
    }

    #[test]
    fn vertex_layout_is_accepted() {
        let json = r#"{
            "root": 0,
            "vertices": [[0, "crane"], [1, "stone"], [2, "brane"]],
            "successors": {
                "(0, (0, 0, 0, 2, 2))": 1,
                "(0, (0, 2, 2, 2, 2))": 2
            }
        }"#;

        let tree = DecisionTree::from_json(json, TreeMode::Regular).unwrap();
        assert_eq!(tree, small_tree());
    }

    #[test]
    fn canonical_json_reloads_identically() {
        let tree = small_tree();
        let json = tree.to_json().unwrap();

        assert!(json.contains("\"mode\": \"regular\""));
        assert_eq!(DecisionTree::from_json(&json, TreeMode::Regular).unwrap(), tree);
    }

    #[test]
    fn structural_errors_are_caught_at_load() {
        let missing_root = r#"{"root": 5, "nodes": {"0": {"guess": "crane"}}}"#;
        assert!(matches!(
            DecisionTree::from_json(missing_root, TreeMode::Regular),
            Err(DataError::Tree(TreeError::MissingRoot(NodeId(5))))
        ));

        let dangling =
            r#"{"root": 0, "nodes": {"0": {"guess": "crane", "successors": {"00000": 3}}}}"#;
        assert!(matches!(
            DecisionTree::from_json(dangling, TreeMode::Regular),
            Err(DataError::Tree(TreeError::DanglingSuccessor { .. }))
        ));

        let perfect =
            r#"{"root": 0, "nodes": {"0": {"guess": "crane", "successors": {"22222": 0}}}}"#;
        assert!(matches!(
            DecisionTree::from_json(perfect, TreeMode::Regular),
            Err(DataError::Tree(TreeError::PerfectSuccessor { .. }))
        ));

        let bad_key =
            r#"{"root": 0, "nodes": {"0": {"guess": "crane", "successors": {"2202": 0}}}}"#;
        assert!(matches!(
            DecisionTree::from_json(bad_key, TreeMode::Regular),
            Err(DataError::Tree(TreeError::InvalidKey { .. }))
        ));

        assert!(matches!(
            DecisionTree::from_json("{not json", TreeMode::Regular),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn declared_mode_must_match() {
        let json = r#"{"mode": "hard", "root": 0, "nodes": {"0": {"guess": "crane"}}}"#;
        assert!(matches!(
            DecisionTree::from_json(json, TreeMode::Regular),
            Err(DataError::Tree(TreeError::ModeMismatch { .. }))
        ));
        assert!(DecisionTree::from_json(json, TreeMode::Hard).is_ok());
    }

    #[test]
    fn navigation_is_deterministic() {
        let tree = DecisionTree::from_json(TREE_JSON, TreeMode::Regular).unwrap();
        let secret = word("llama");

        let run = || {
            let mut path = Vec::new();
            let (mut guess, mut cursor) = tree.step(None, None).unwrap();
            loop {
                path.push((guess, cursor));
                let fb = Feedback::score(&guess, &secret);
                if fb.is_perfect() {
                    return path;
                }
                (guess, cursor) = tree.step(Some(cursor), Some(&fb)).unwrap();
            }
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn play_detects_hard_mode_violations() {
        // After CRANE vs STONE (N and E green) the tree guesses a word without them
        let json = r#"{
            "mode": "hard",
            "root": 0,
            "nodes": {
                "0": {"guess": "crane", "successors": {"00022": 1}},
                "1": {"guess": "moist", "successors": {}}
            }
        }"#;
        let tree = DecisionTree::from_json(json, TreeMode::Hard).unwrap();

        assert!(matches!(
            tree.play(&word("stone")),
            Err(TreeError::HardModeViolation { node: NodeId(1), .. })
        ));
    }

    #[test]
    fn play_detects_cycles() {
        let json = r#"{
            "root": 0,
            "nodes": {
                "0": {"guess": "crane", "successors": {"00022": 1}},
                "1": {"guess": "crane", "successors": {"00022": 0}}
            }
        }"#;
        let tree = DecisionTree::from_json(json, TreeMode::Regular).unwrap();

        assert_eq!(
            tree.play(&word("stone")),
            Err(TreeError::Cycle { secret: word("stone") })
        );
    }

    #[test]
    fn embedded_trees_solve_every_solution() {
        let secrets = words_from_slice(SOLUTIONS);

        let regular = DecisionTree::from_json(TREE_JSON, TreeMode::Regular).unwrap();
        let report = regular.evaluate(&secrets).unwrap();
        assert_eq!(report.secrets, secrets.len());
        assert_eq!(report.exceeding(6), 0);
        assert_eq!(report.distribution.values().sum::<usize>(), secrets.len());

        let hard = DecisionTree::from_json(HARD_TREE_JSON, TreeMode::Hard).unwrap();
        let report = hard.evaluate(&secrets).unwrap();
        assert_eq!(report.exceeding(6), 0);
        assert!(report.mean >= 2.0);
    }

    #[test]
    fn report_statistics() {
        let report = TreeReport::from_depths(TreeMode::Regular, 4, &[2, 3, 3, 4]);

        assert!((report.mean - 3.0).abs() < 1e-9);
        assert!((report.std_dev - 0.5_f64.sqrt()).abs() < 1e-9);
        assert_eq!(report.max, 4);
        assert_eq!(report.exceeding(3), 1);
    }

    #[test]
    fn tree_hints_follow_the_tree() {
        let mut hints = TreeHints::new(Arc::new(small_tree()));
        assert_eq!(hints.suggestion(), Ok(word("crane")));

        hints
            .observe(&word("crane"), &feedback("02222"))
            .unwrap();
        assert_eq!(hints.suggestion(), Ok(word("brane")));
        assert_eq!(hints.cursor(), NodeId(2));

        hints.restart();
        assert_eq!(hints.cursor(), NodeId(0));
    }

    #[test]
    fn tree_hints_report_deviation() {
        let mut hints = TreeHints::new(Arc::new(small_tree()));

        let result = hints.observe(&word("slate"), &feedback("00022"));
        assert_eq!(
            result,
            Err(HintError::OffTree {
                expected: word("crane"),
                played: word("slate"),
            })
        );
        assert_eq!(hints.suggestion(), Ok(word("crane")));
    }

    #[test]
    fn tree_set_selects_by_mode() {
        let set = TreeSet::new(Some(small_tree()), None);

        assert!(set.for_hard_mode(false).is_some());
        assert!(set.for_hard_mode(true).is_none());
    }
}
