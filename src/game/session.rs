//! A sequence of rounds with shared data and running statistics

use super::round::{Round, RoundError, RoundStatus, Submission, SubmitError};
use super::Dictionary;
use crate::config::Settings;
use crate::core::Word;
use crate::error::DataError;
use crate::hints::{DecisionTree, HintMode, HintSource, TreeMode, TreeSet};
use crate::wordlists::{HARD_TREE_JSON, TREE_JSON};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Read-only data every round is played against
#[derive(Debug, Clone)]
pub struct GameData {
    pub dictionary: Arc<Dictionary>,
    pub trees: TreeSet,
}

impl GameData {
    /// Word lists and trees compiled into the binary
    ///
    /// # Errors
    /// Returns [`DataError`] if an embedded tree fails to load.
    pub fn embedded() -> Result<Self, DataError> {
        Ok(Self {
            dictionary: Arc::new(Dictionary::embedded()),
            trees: TreeSet::new(
                Some(DecisionTree::from_json(TREE_JSON, TreeMode::Regular)?),
                Some(DecisionTree::from_json(HARD_TREE_JSON, TreeMode::Hard)?),
            ),
        })
    }

    /// What rounds need to offer the chosen kind of hints
    #[must_use]
    pub fn hint_source(&self, mode: HintMode) -> HintSource {
        match mode {
            HintMode::None => HintSource::None,
            HintMode::Candidates => {
                HintSource::Candidates(Arc::clone(self.dictionary.solutions()))
            }
            HintMode::Tree => HintSource::Tree(self.trees.clone()),
        }
    }
}

/// Results of finished rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    /// Guesses used -> rounds won with that many
    pub distribution: BTreeMap<usize, usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished round
    pub fn record(&mut self, status: RoundStatus, guesses: usize) {
        match status {
            RoundStatus::InProgress => return,
            RoundStatus::Won => {
                self.won += 1;
                *self.distribution.entry(guesses).or_insert(0) += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            RoundStatus::Lost => self.current_streak = 0,
        }
        self.played += 1;
    }

    /// Share of rounds won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 * 100.0 / self.played as f64
        }
    }
}

/// Consecutive rounds with a random secret each
#[derive(Debug)]
pub struct Session {
    data: GameData,
    settings: Settings,
    rng: StdRng,
    round: Round,
    stats: Statistics,
}

impl Session {
    /// Start a session and its first round
    ///
    /// With a seed the sequence of secrets is reproducible.
    ///
    /// # Errors
    /// Returns [`RoundError`] if the settings cannot start a round.
    pub fn new(data: GameData, settings: Settings, seed: Option<u64>) -> Result<Self, RoundError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = Self::draw(&data, &mut rng);
        let source = data.hint_source(settings.hints);
        let round = Round::new(secret, Arc::clone(&data.dictionary), &settings, source)?;

        Ok(Self {
            data,
            settings,
            rng,
            round,
            stats: Statistics::default(),
        })
    }

    fn draw(data: &GameData, rng: &mut StdRng) -> Word {
        *data
            .dictionary
            .solutions()
            .choose(rng)
            .expect("dictionary has at least one solution")
    }

    /// Play a guess in the current round
    ///
    /// # Errors
    /// Returns [`SubmitError`] if the round refuses the guess.
    pub fn submit(&mut self, text: &str) -> Result<Submission, SubmitError> {
        let submission = self.round.submit(text)?;
        if submission.status.is_over() {
            self.stats.record(submission.status, self.round.attempt());
        }
        Ok(submission)
    }

    /// Abandon or finish the current round and start another
    ///
    /// An unfinished round is not counted in the statistics.
    pub fn new_round(&mut self) {
        let secret = Self::draw(&self.data, &mut self.rng);
        self.round
            .reset(secret)
            .expect("secret is drawn from the solution list");
        self.round
            .set_hard_mode(self.settings.hard_mode)
            .expect("no guesses yet");
    }

    /// Toggle hard mode for the current round and those that follow
    ///
    /// # Errors
    /// Returns [`RoundError::ModeLocked`] once the current round has a guess.
    pub fn set_hard_mode(&mut self, hard_mode: bool) -> Result<(), RoundError> {
        self.round.set_hard_mode(hard_mode)?;
        self.settings.hard_mode = hard_mode;
        Ok(())
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn data(&self) -> &GameData {
        &self.data
    }
}
