//! Errors raised by the drivers around the engine.
//!
//! The engine's own operations never fail; these cover refusing to start an
//! unplayable game, bad runner configuration, and runaway games.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer than two players are seated.
    #[error("game needs at least 2 players, has {players}")]
    NotPlayable { players: usize },

    #[error("invalid runner configuration: {0}")]
    InvalidConfig(String),

    /// Nobody won before the runner's turn cap.
    #[error("no winner after {turns} turns")]
    TurnLimit { turns: u32 },
}
