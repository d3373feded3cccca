//! Core types: players and deterministic randomness.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, MAX_DIE_FACES};
