//! Deterministic random number generation for the game runners.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice and answers
//! - **Serializable**: O(1) state capture and restore
//!
//! The engine itself never draws random numbers; rolls are inputs. Only the
//! drivers in [`crate::runner`] use this.
//!
//! ```
//! use trivia_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(rng.roll_die(6), replay.roll_die(6));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Largest die [`GameRng::roll_die`] accepts; rolls must fit in an `i32`.
pub const MAX_DIE_FACES: u32 = i32::MAX as u32;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a die with `faces` sides, returning `1..=faces`.
    pub fn roll_die(&mut self, faces: u32) -> i32 {
        assert!(faces > 0, "A die needs at least one face");
        assert!(faces <= MAX_DIE_FACES, "A die has at most i32::MAX faces");
        self.inner.gen_range(1..=faces as i32)
    }

    /// True with probability `1 / n`.
    pub fn one_in(&mut self, n: u32) -> bool {
        assert!(n > 0, "Odds must be at least one in one");
        self.inner.gen_range(0..n) == 0
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing a runner mid-game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
