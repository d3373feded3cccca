//! Game events.
//!
//! Every state change the engine makes is announced as an [`Event`]. Events
//! carry the data (names, rolls, cells, counts); `Display` renders each one
//! as the single announcement line a table host would read out.
//!
//! ## Answer spelling
//!
//! Correct answers from players outside the penalty box render as
//! `"Answer was corrent!!!!"`. Existing transcripts depend on that
//! misspelling, so it is kept. Players who escaped the box this turn get
//! `"Answer was correct!!!!"`.

use serde::{Deserialize, Serialize};

use crate::board::{create_question, Category};

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A player joined the roster.
    PlayerAdded { name: String },
    /// The 1-based seat of the player who just joined.
    PlayerNumber { seat: usize },
    /// Start of a roll: whose turn it is.
    CurrentPlayer { name: String },
    /// The die value received, unvalidated.
    Rolled { amount: i32 },
    /// A boxed player rolled odd and moves this turn.
    LeavingPenaltyBox { name: String },
    /// A boxed player rolled even and stays put.
    StayingInPenaltyBox { name: String },
    /// A player landed on a cell.
    NewLocation { name: String, position: u8 },
    /// Category of the cell just landed on.
    Category { category: Category },
    /// The question dealt for that category.
    Question { category: Category, index: u32 },
    /// The current player answered correctly.
    AnswerCorrect { escaped: bool },
    /// The current player answered incorrectly.
    AnswerIncorrect,
    /// The current player was boxed for a wrong answer.
    SentToPenaltyBox { name: String },
    /// Coin total after an award.
    Purse { name: String, coins: u32 },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::PlayerAdded { name } => write!(f, "{} was added", name),
            Event::PlayerNumber { seat } => write!(f, "They are player number {}", seat),
            Event::CurrentPlayer { name } => write!(f, "{} is the current player", name),
            Event::Rolled { amount } => write!(f, "They have rolled a {}", amount),
            Event::LeavingPenaltyBox { name } => {
                write!(f, "{} is getting out of the penalty box", name)
            }
            Event::StayingInPenaltyBox { name } => {
                write!(f, "{} is not getting out of the penalty box", name)
            }
            Event::NewLocation { name, position } => {
                write!(f, "{}'s new location is {}", name, position)
            }
            Event::Category { category } => write!(f, "The category is {}", category),
            Event::Question { category, index } => {
                f.write_str(&create_question(*category, index))
            }
            Event::AnswerCorrect { escaped: true } => f.write_str("Answer was correct!!!!"),
            Event::AnswerCorrect { escaped: false } => f.write_str("Answer was corrent!!!!"),
            Event::AnswerIncorrect => f.write_str("Question was incorrectly answered"),
            Event::SentToPenaltyBox { name } => write!(f, "{} was sent to the penalty box", name),
            Event::Purse { name, coins } => write!(f, "{} now has {} Gold Coins.", name, coins),
        }
    }
}
