//! The circular board, its category cycle, and the question bank.
//!
//! The board has [`Board::CELLS`] cells. Every cell belongs to one of four
//! question categories, repeating every four cells. Questions are not
//! stored; each category keeps a counter and question text is generated
//! from it on demand.

pub mod category;
pub mod question;

pub use category::Category;
pub use question::{create_question, create_rock_question, QuestionBank};

/// Board geometry.
pub struct Board;

impl Board {
    /// Number of cells around the board.
    pub const CELLS: u8 = 12;

    /// Cell reached by moving `roll` cells forward from `position`.
    ///
    /// Any roll is accepted; negative and oversized rolls wrap with
    /// Euclidean remainder, so the result is always in `0..CELLS`.
    ///
    /// ```
    /// use trivia_engine::board::Board;
    ///
    /// assert_eq!(Board::advance(10, 3), 1);
    /// assert_eq!(Board::advance(0, 42), 6);
    /// assert_eq!(Board::advance(1, -2), 11);
    /// ```
    #[must_use]
    pub fn advance(position: u8, roll: i32) -> u8 {
        let cells = i64::from(Self::CELLS);
        (i64::from(position) + i64::from(roll)).rem_euclid(cells) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_within_board() {
        assert_eq!(Board::advance(0, 0), 0);
        assert_eq!(Board::advance(0, 1), 1);
        assert_eq!(Board::advance(4, 6), 10);
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(Board::advance(11, 1), 0);
        assert_eq!(Board::advance(9, 5), 2);
        assert_eq!(Board::advance(0, 12), 0);
        assert_eq!(Board::advance(0, 24), 0);
    }

    #[test]
    fn test_advance_extreme_rolls() {
        assert_eq!(Board::advance(0, -1), 11);
        assert_eq!(Board::advance(0, -13), 11);
        assert!(Board::advance(11, i32::MAX) < Board::CELLS);
        assert!(Board::advance(11, i32::MIN) < Board::CELLS);
    }
}
