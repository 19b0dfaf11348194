//! Game rules beyond plain scoring

mod hard_mode;

pub use hard_mode::{HardConstraints, Violation};
