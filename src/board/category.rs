//! Question categories and the cell-to-category cycle.

use serde::{Deserialize, Serialize};

/// One of the four question categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pop,
    Science,
    Sports,
    Rock,
}

impl Category {
    /// All categories, in board order starting from cell 0.
    pub const ALL: [Category; 4] = [
        Category::Pop,
        Category::Science,
        Category::Sports,
        Category::Rock,
    ];

    /// Category of a board cell.
    ///
    /// Cells `{0, 4, 8}` are Pop, `{1, 5, 9}` Science, `{2, 6, 10}` Sports
    /// and `{3, 7, 11}` Rock.
    ///
    /// ```
    /// use trivia_engine::board::Category;
    ///
    /// assert_eq!(Category::for_position(1), Category::Science);
    /// assert_eq!(Category::for_position(8), Category::Pop);
    /// ```
    #[must_use]
    pub fn for_position(position: u8) -> Self {
        Self::ALL[usize::from(position) % Self::ALL.len()]
    }

    /// Display name, as used in announcements and question text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Rock => "Rock",
        }
    }

    /// Slot of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
