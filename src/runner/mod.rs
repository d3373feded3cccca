//! Drivers that play a whole game against the engine.
//!
//! - [`ScriptedRunner`]: fixed roll and answer cadence, used for regression
//!   transcripts
//! - [`RandomRunner`]: seeded dice and answers
//!
//! Both seat the given players, then alternate one roll and one answer per
//! turn until a correct answer reports the game over.

pub mod config;
pub mod random;
pub mod scripted;

pub use config::RunnerConfig;
pub use random::RandomRunner;
pub use scripted::ScriptedRunner;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{GameError, Result};
use crate::events::EventSink;
use crate::rules::Game;

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Roll-and-answer turns played, including the winning one.
    pub turns: u32,
    /// Final coin count per seat.
    pub purses: Vec<u32>,
}

/// What to do on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TurnPlan {
    pub roll: i32,
    pub correct: bool,
}

/// Seat `names` in a fresh game announcing to `sink`.
pub(crate) fn seat<S, I>(names: I, sink: S) -> Result<Game<S>>
where
    S: EventSink,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut game = Game::with_sink(sink);
    for name in names {
        game.add_player(name);
    }
    if !game.is_playable() {
        return Err(GameError::NotPlayable {
            players: game.player_count(),
        });
    }
    Ok(game)
}

/// Play turns from `plan` until someone wins or `max_turns` pass.
///
/// `plan` receives the 1-based turn number.
pub(crate) fn play<S: EventSink>(
    game: &mut Game<S>,
    max_turns: u32,
    mut plan: impl FnMut(u32) -> TurnPlan,
) -> Result<GameSummary> {
    for turn in 1..=max_turns {
        let TurnPlan { roll, correct } = plan(turn);
        game.roll(roll);

        let still_on = if correct {
            game.was_correctly_answered()
        } else {
            game.wrong_answer()
        };

        if still_on {
            continue;
        }
        // A false return always records a winner.
        if let Some(winner) = game.winner() {
            return Ok(summarize(game, winner, turn));
        }
    }

    log::debug!("stopping after {} turns without a winner", max_turns);
    Err(GameError::TurnLimit { turns: max_turns })
}

fn summarize<S: EventSink>(game: &Game<S>, winner: PlayerId, turns: u32) -> GameSummary {
    let winner_name = game
        .player(winner)
        .map(|p| p.name().to_string())
        .unwrap_or_default();

    GameSummary {
        winner,
        winner_name,
        turns,
        purses: game.players().iter().map(|p| p.purse()).collect(),
    }
}
