//! Evaluate a hint strategy over every solution word
//!
//! Tree hints are checked by walking the tree for each secret. Candidate
//! hints are evaluated by autoplaying a round per secret.

use super::solve::{SolveError, autoplay};
use crate::config::Settings;
use crate::core::Word;
use crate::game::{GameData, Round, RoundStatus};
use crate::hints::{HintMode, TreeError, TreeMode};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why an evaluation could not run
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("hints are turned off; choose candidates or tree")]
    NoStrategy,
    #[error("no {0} decision tree is loaded")]
    NoTree(TreeMode),
    #[error("decision tree failed")]
    Tree(#[from] TreeError),
    #[error("autoplay failed for {secret}")]
    Autoplay {
        secret: Word,
        #[source]
        source: SolveError,
    },
}

/// Statistics from evaluating a strategy
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub strategy: HintMode,
    pub hard_mode: bool,
    pub max_attempts: usize,
    pub tested: usize,
    /// Secrets not solved within `max_attempts`
    pub failed: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub max: usize,
    /// Guesses used -> number of secrets
    pub distribution: BTreeMap<usize, usize>,
    /// Tree size, for tree hints
    pub vertices: Option<usize>,
    pub duration: Duration,
}

/// Run the evaluation
///
/// `limit` restricts candidate autoplay to the first solution words. Tree
/// evaluation always covers the whole list.
///
/// # Errors
/// Returns [`EvaluateError`] if hints are off, the tree for the mode is
/// missing, or the strategy fails on some secret.
pub fn run_evaluation(
    data: &GameData,
    settings: &Settings,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<EvaluationResult, EvaluateError> {
    let secrets = data.dictionary.solutions();
    let start = Instant::now();

    match settings.hints {
        HintMode::None => Err(EvaluateError::NoStrategy),
        HintMode::Tree => {
            let mode = if settings.hard_mode {
                TreeMode::Hard
            } else {
                TreeMode::Regular
            };
            let tree = data.trees.get(mode).ok_or(EvaluateError::NoTree(mode))?;
            let report = tree.evaluate(secrets)?;

            Ok(EvaluationResult {
                strategy: HintMode::Tree,
                hard_mode: settings.hard_mode,
                max_attempts: settings.max_attempts,
                tested: report.secrets,
                failed: report.exceeding(settings.max_attempts),
                mean: report.mean,
                std_dev: report.std_dev,
                max: report.max,
                distribution: report.distribution,
                vertices: Some(report.vertices),
                duration: start.elapsed(),
            })
        }
        HintMode::Candidates => {
            let take = limit.unwrap_or(secrets.len()).min(secrets.len());
            let secrets = &secrets[..take];
            let outcomes = autoplay_all(data, settings, secrets, show_progress)?;
            Ok(summarize(settings, &outcomes, start.elapsed()))
        }
    }
}

/// Guesses used per secret, `None` when the round was lost
fn autoplay_all(
    data: &GameData,
    settings: &Settings,
    secrets: &[Word],
    show_progress: bool,
) -> Result<Vec<Option<usize>>, EvaluateError> {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let source = data.hint_source(settings.hints);
    let outcomes = secrets
        .par_iter()
        .map(|&secret| {
            let fail = |source: SolveError| EvaluateError::Autoplay { secret, source };

            let mut round = Round::new(secret, data.dictionary.clone(), settings, source.clone())
                .map_err(|e| fail(e.into()))?;
            let steps = autoplay(&mut round).map_err(fail)?;
            pb.inc(1);

            Ok((round.status() == RoundStatus::Won).then_some(steps.len()))
        })
        .collect::<Result<Vec<_>, EvaluateError>>();

    pb.finish_with_message("Complete!");
    outcomes
}

fn summarize(
    settings: &Settings,
    outcomes: &[Option<usize>],
    duration: Duration,
) -> EvaluationResult {
    let solved: Vec<usize> = outcomes.iter().flatten().copied().collect();

    let mut distribution = BTreeMap::new();
    for &guesses in &solved {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let (mean, std_dev) = if solved.is_empty() {
        (0.0, 0.0)
    } else {
        let n = solved.len() as f64;
        let mean = solved.iter().sum::<usize>() as f64 / n;
        let variance = solved
            .iter()
            .map(|&g| (g as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        (mean, variance.sqrt())
    };

    EvaluationResult {
        strategy: settings.hints,
        hard_mode: settings.hard_mode,
        max_attempts: settings.max_attempts,
        tested: outcomes.len(),
        failed: outcomes.len() - solved.len(),
        mean,
        std_dev,
        max: solved.iter().copied().max().unwrap_or(0),
        distribution,
        vertices: None,
        duration,
    }
}
