//! Runner configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::MAX_DIE_FACES;
use crate::error::{GameError, Result};

/// Settings for [`RandomRunner`](super::RandomRunner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Random seed for dice and answers.
    /// Same seed replays the same game.
    pub seed: u64,

    /// Sides on the die; rolls are `1..=die_faces`, at most
    /// [`MAX_DIE_FACES`].
    pub die_faces: u32,

    /// A turn's answer is wrong with probability `1 / wrong_answer_one_in`.
    pub wrong_answer_one_in: u32,

    /// Give up with [`GameError::TurnLimit`] after this many turns.
    pub max_turns: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            die_faces: 6,
            wrong_answer_one_in: 9,
            max_turns: 1000,
        }
    }
}

impl RunnerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    pub fn with_wrong_answer_odds(mut self, one_in: u32) -> Self {
        self.wrong_answer_one_in = one_in;
        self
    }

    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Reject settings the runner cannot play with.
    pub fn validate(&self) -> Result<()> {
        if self.die_faces == 0 {
            return Err(GameError::InvalidConfig("die_faces must be positive".into()));
        }
        if self.die_faces > MAX_DIE_FACES {
            return Err(GameError::InvalidConfig(format!(
                "die_faces must be at most {}",
                MAX_DIE_FACES
            )));
        }
        if self.wrong_answer_one_in == 0 {
            return Err(GameError::InvalidConfig(
                "wrong_answer_one_in must be positive".into(),
            ));
        }
        if self.max_turns == 0 {
            return Err(GameError::InvalidConfig("max_turns must be positive".into()));
        }
        Ok(())
    }
}
