//! # trivia-engine
//!
//! Turn logic for a multi-player trivia board game.
//!
//! Players take turns rolling a die, moving around a 12-cell board, and
//! answering a question from the category of the cell they land on. A
//! correct answer earns a gold coin; a wrong one sends the player to the
//! penalty box, which they can only leave on an odd roll. The first player
//! to six coins wins.
//!
//! ## Design Principles
//!
//! 1. **One owned state machine**: [`Game`] holds all state. No globals;
//!    construct a fresh game per match.
//!
//! 2. **No I/O in the core**: every state change is an [`Event`] handed to an
//!    injected [`EventSink`]. `Display` on `Event` renders the announcement
//!    line; printing it is up to the caller.
//!
//! 3. **Permissive input**: rolls are any integer, names anything, and the
//!    call order is not policed. Drivers in [`runner`] check playability.
//!
//! ## Modules
//!
//! - `core`: Player IDs, player records, RNG
//! - `board`: Board geometry, categories, question bank
//! - `events`: Events and sinks
//! - `rules`: The game state machine
//! - `runner`: Scripted and random game drivers
//! - `error`: Driver errors

pub mod board;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerId, MAX_DIE_FACES};

pub use crate::board::{create_question, create_rock_question, Board, Category, QuestionBank};

pub use crate::events::{Event, EventLog, EventSink, NullSink, Transcript};

pub use crate::rules::{Game, MIN_PLAYERS, WINNING_PURSE};

pub use crate::runner::{GameSummary, RandomRunner, RunnerConfig, ScriptedRunner};

pub use crate::error::{GameError, Result};
