//! Game rules: the trivia state machine.
//!
//! [`Game`] owns the roster, board positions, penalty box flags, purses,
//! question counters and the turn pointer. Everything it does is announced
//! through an [`EventSink`](crate::events::EventSink).

pub mod game;

pub use game::{Game, MIN_PLAYERS, WINNING_PURSE};
