//! Game settings

use crate::hints::HintMode;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Per-round rules and hint selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_attempts: usize,
    pub hard_mode: bool,
    pub hints: HintMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hard_mode: false,
            hints: HintMode::Candidates,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_hints(mut self, hints: HintMode) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
