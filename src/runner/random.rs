//! Seeded random runner.
//!
//! Each turn rolls one die and answers wrongly with fixed odds, drawing
//! both from a [`GameRng`] so a seed replays the same game.

use super::{play, seat, GameSummary, RunnerConfig, TurnPlan};
use crate::core::GameRng;
use crate::error::Result;
use crate::events::{EventLog, EventSink};
use crate::rules::Game;

/// Plays a game with random dice and answers.
#[derive(Clone, Debug)]
pub struct RandomRunner {
    names: Vec<String>,
    config: RunnerConfig,
}

impl RandomRunner {
    pub fn new<I>(names: I, config: RunnerConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Play to completion, recording events in an [`EventLog`].
    pub fn run(&self) -> Result<(Game<EventLog>, GameSummary)> {
        self.run_with(EventLog::new())
    }

    /// Play to completion, announcing to `sink`.
    pub fn run_with<S: EventSink>(&self, sink: S) -> Result<(Game<S>, GameSummary)> {
        self.config.validate()?;
        let mut game = seat(self.names.iter().cloned(), sink)?;

        let mut rng = GameRng::new(self.config.seed);
        let faces = self.config.die_faces;
        let odds = self.config.wrong_answer_one_in;
        log::debug!(
            "random game: {} players, seed {}, d{}",
            game.player_count(),
            rng.seed(),
            faces
        );

        let summary = play(&mut game, self.config.max_turns, |_| {
            let roll = rng.roll_die(faces);
            let correct = !rng.one_in(odds);
            TurnPlan { roll, correct }
        })?;
        Ok((game, summary))
    }
}
