//! Command implementations

pub mod convert;
pub mod evaluate;
pub mod score;
pub mod simple;
pub mod solve;

pub use convert::{ConvertResult, convert_tree};
pub use evaluate::{EvaluateError, EvaluationResult, run_evaluation};
pub use score::{ScoreResult, score_pair};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveError, SolveResult, autoplay, solve_word};
