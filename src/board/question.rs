//! On-demand question generation.
//!
//! The bank never stores question text. Each category has a counter shared
//! by every player; dealing a question reads the counter, then bumps it, so
//! the kth question of a category has index `k - 1`.

use super::Category;

/// Render the text of question `index` in `category`.
///
/// ```
/// use trivia_engine::board::{create_question, Category};
///
/// assert_eq!(create_question(Category::Pop, 3), "Pop Question 3");
/// ```
#[must_use]
pub fn create_question(category: Category, index: impl std::fmt::Display) -> String {
    format!("{} Question {}", category, index)
}

/// Render the text of Rock question `index`.
#[must_use]
pub fn create_rock_question(index: impl std::fmt::Display) -> String {
    create_question(Category::Rock, index)
}

/// Per-category question counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionBank {
    dealt: [u32; 4],
}

impl QuestionBank {
    /// A bank with no questions dealt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal the next question in `category`, returning its 0-based index.
    pub fn deal(&mut self, category: Category) -> u32 {
        let slot = &mut self.dealt[category.index()];
        let index = *slot;
        *slot += 1;
        log::trace!("dealt {} question {}", category, index);
        index
    }

    /// How many questions of `category` have been dealt.
    #[must_use]
    pub fn dealt(&self, category: Category) -> u32 {
        self.dealt[category.index()]
    }
}
