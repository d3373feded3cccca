//! Fixed-cadence runner.
//!
//! On turn `i` (1-based) the current player rolls `i % 6`; every fifth turn
//! is answered wrongly, every other turn correctly. The cadence exercises
//! wraparound, zero rolls, and both sides of the penalty box, and its
//! transcripts serve as regression fixtures.

use super::{play, seat, GameSummary, TurnPlan};
use crate::error::Result;
use crate::events::{EventLog, EventSink};
use crate::rules::Game;

const ROLL_CYCLE: u32 = 6;
const WRONG_EVERY: u32 = 5;

/// Plays the fixed cadence for a roster.
#[derive(Clone, Debug)]
pub struct ScriptedRunner {
    names: Vec<String>,
    max_turns: u32,
}

impl ScriptedRunner {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            max_turns: 1000,
        }
    }

    /// Cap the game length.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// The plan for 1-based turn `turn`.
    pub(crate) fn plan(turn: u32) -> TurnPlan {
        TurnPlan {
            roll: (turn % ROLL_CYCLE) as i32,
            correct: turn % WRONG_EVERY != 0,
        }
    }

    /// Play to completion, recording events in an [`EventLog`].
    pub fn run(&self) -> Result<(Game<EventLog>, GameSummary)> {
        self.run_with(EventLog::new())
    }

    /// Play to completion, announcing to `sink`.
    pub fn run_with<S: EventSink>(&self, sink: S) -> Result<(Game<S>, GameSummary)> {
        let mut game = seat(self.names.iter().cloned(), sink)?;
        let summary = play(&mut game, self.max_turns, Self::plan)?;
        Ok((game, summary))
    }
}
