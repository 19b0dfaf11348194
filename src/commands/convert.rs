//! Normalise a decision tree file
//!
//! Reads any supported tree layout and writes the canonical JSON form.

use crate::error::DataError;
use crate::hints::{DecisionTree, TreeMode};
use std::fs;
use std::path::Path;

/// Summary of a converted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    pub mode: TreeMode,
    pub nodes: usize,
    pub root_guess: String,
}

/// Convert `input` into canonical JSON at `output`
///
/// # Errors
/// Returns [`DataError`] if the input cannot be read or is not a valid tree,
/// or the output cannot be written.
pub fn convert_tree(input: &Path, output: &Path, mode: TreeMode) -> Result<ConvertResult, DataError> {
    let tree = DecisionTree::from_file(input, mode)?;
    let json = tree.to_json()?;

    fs::write(output, json).map_err(|source| DataError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} nodes to {}", tree.len(), output.display());

    Ok(ConvertResult {
        mode,
        nodes: tree.len(),
        root_guess: tree.root_guess().to_string(),
    })
}
