//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe seat index into the roster. Seats are handed out in
//! registration order and never reused, since the roster is append-only.
//!
//! ## Player
//!
//! Everything the engine tracks for one seat: name, board position,
//! penalty box flag and coin purse.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Seat identifier, 0-based in registration order.
///
/// Turn order is seat order: `PlayerId(0)` rolls first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The 1-based seat number announced when the player joins.
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 + 1
    }

    /// The seat after this one in a roster of `player_count`, wrapping to 0.
    ///
    /// ```
    /// use trivia_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Cannot advance in an empty roster");
        Self((self.0 + 1) % player_count)
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// A registered player.
///
/// Names are free-form: empty and duplicate names are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: u8,
    in_penalty_box: bool,
    purse: u32,
}

impl Player {
    /// A fresh player on the starting cell with an empty purse.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            in_penalty_box: false,
            purse: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board cell, always in `0..Board::CELLS`.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub fn in_penalty_box(&self) -> bool {
        self.in_penalty_box
    }

    /// Gold coins earned so far.
    #[must_use]
    pub fn purse(&self) -> u32 {
        self.purse
    }

    /// Move `roll` cells around the board and return the new cell.
    pub(crate) fn advance(&mut self, roll: i32) -> u8 {
        self.position = Board::advance(self.position, roll);
        self.position
    }

    /// Award one coin and return the new total.
    pub(crate) fn award_coin(&mut self) -> u32 {
        self.purse += 1;
        self.purse
    }

    pub(crate) fn send_to_penalty_box(&mut self) {
        self.in_penalty_box = true;
    }
}
