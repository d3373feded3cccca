//! The trivia game state machine.
//!
//! ## Turn structure
//!
//! A turn is one [`Game::roll`] followed by one answer call,
//! [`Game::was_correctly_answered`] or [`Game::wrong_answer`]. The roll
//! moves the current player and deals a question; the answer call scores
//! it and passes the turn to the next seat.
//!
//! ## Penalty box
//!
//! A wrong answer boxes the player. From then on every roll is an escape
//! attempt: odd rolls let the player move and answer for coins that turn,
//! even rolls skip movement and the question entirely. The box flag is
//! never cleared, so a player who escapes once still needs an odd roll on
//! each later turn.
//!
//! ## Winning
//!
//! The first purse to reach [`WINNING_PURSE`] wins. The correct-answer call
//! that awards that coin returns `false`; [`Game::is_game_over`] reports
//! the same thing without scoring.
//!
//! No operation validates its input or the call order: rolls may be any
//! integer, answers may be given without a roll, and players may join at
//! any time. Operations on an empty roster do nothing.

use crate::board::{create_rock_question, Category, QuestionBank};
use crate::core::{Player, PlayerId};
use crate::events::{Event, EventLog, EventSink};

/// Coins needed to win.
pub const WINNING_PURSE: u32 = 6;

/// Minimum roster size for a playable game.
pub const MIN_PLAYERS: usize = 2;

/// A trivia game, announcing every change to its sink `S`.
///
/// ```
/// use trivia_engine::Game;
///
/// let mut game = Game::new();
/// game.add_player("Chet");
/// game.add_player("Pat");
/// assert!(game.is_playable());
///
/// game.roll(1);
/// assert!(game.was_correctly_answered());
///
/// let lines: Vec<_> = game.sink().lines().collect();
/// assert_eq!(lines[4], "Chet is the current player");
/// assert_eq!(lines[7], "The category is Science");
/// ```
#[derive(Clone, Debug)]
pub struct Game<S: EventSink = EventLog> {
    players: Vec<Player>,
    current: PlayerId,
    questions: QuestionBank,
    /// Outcome of the last escape attempt. Only read while the current
    /// player is boxed.
    escaping: bool,
    winner: Option<PlayerId>,
    sink: S,
}

impl Game<EventLog> {
    /// An empty game recording its events in an [`EventLog`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(EventLog::new())
    }
}

impl Default for Game<EventLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> Game<S> {
    /// An empty game announcing to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            players: Vec::new(),
            current: PlayerId::new(0),
            questions: QuestionBank::new(),
            escaping: false,
            winner: None,
            sink,
        }
    }

    // === Sink ===

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the game, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, event: Event) {
        self.sink.emit(&event);
    }

    // === Roster ===

    /// Seat a new player at the end of the turn order.
    ///
    /// Always succeeds; names are not validated.
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        let player = Player::new(name);
        let name = player.name().to_string();
        self.players.push(player);

        self.emit(Event::PlayerAdded { name });
        self.emit(Event::PlayerNumber {
            seat: self.players.len(),
        });
        true
    }

    /// True once at least [`MIN_PLAYERS`] are seated.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.player_count() >= MIN_PLAYERS
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Whose turn it is, or `None` for an empty roster.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        (self.current.index() < self.players.len()).then_some(self.current)
    }

    // === Turn ===

    /// Resolve a die roll for the current player.
    ///
    /// Does not pass the turn; the answer call that follows does.
    pub fn roll(&mut self, amount: i32) {
        let Some(id) = self.current_player() else {
            log::debug!("roll of {} ignored: no players", amount);
            return;
        };
        let player = &self.players[id.index()];
        let name = player.name().to_string();
        let boxed = player.in_penalty_box();

        self.emit(Event::CurrentPlayer { name: name.clone() });
        self.emit(Event::Rolled { amount });

        if boxed {
            self.escaping = amount % 2 != 0;
            if !self.escaping {
                self.emit(Event::StayingInPenaltyBox { name });
                return;
            }
            self.emit(Event::LeavingPenaltyBox { name: name.clone() });
        }

        self.move_and_ask(id, name, amount);
    }

    fn move_and_ask(&mut self, id: PlayerId, name: String, amount: i32) {
        let position = self.players[id.index()].advance(amount);
        self.emit(Event::NewLocation { name, position });

        let category = Category::for_position(position);
        self.emit(Event::Category { category });

        let index = self.questions.deal(category);
        self.emit(Event::Question { category, index });
    }

    /// Score a correct answer for the current player and pass the turn.
    ///
    /// Returns `false` when this answer brings the player's purse to
    /// [`WINNING_PURSE`], `true` otherwise. A boxed player whose last roll
    /// was even earns nothing and the turn simply passes.
    pub fn was_correctly_answered(&mut self) -> bool {
        let Some(id) = self.current_player() else {
            return true;
        };
        let player = &self.players[id.index()];
        let escaped = player.in_penalty_box();

        if escaped && !self.escaping {
            self.advance_turn();
            return true;
        }

        self.emit(Event::AnswerCorrect { escaped });

        let player = &mut self.players[id.index()];
        let coins = player.award_coin();
        let name = player.name().to_string();
        self.emit(Event::Purse { name, coins });

        let won = coins == WINNING_PURSE;
        if won && self.winner.is_none() {
            log::debug!("{} wins with {} coins", id, coins);
            self.winner = Some(id);
        }

        self.advance_turn();
        !won
    }

    /// Box the current player for a wrong answer and pass the turn.
    ///
    /// Always returns `true`: a wrong answer never ends the game.
    pub fn wrong_answer(&mut self) -> bool {
        let Some(id) = self.current_player() else {
            return true;
        };

        self.emit(Event::AnswerIncorrect);

        let player = &mut self.players[id.index()];
        player.send_to_penalty_box();
        let name = player.name().to_string();
        self.emit(Event::SentToPenaltyBox { name });

        self.advance_turn();
        true
    }

    fn advance_turn(&mut self) {
        let next = self.current.next(self.players.len());
        log::trace!("turn passes from {} to {}", self.current, next);
        self.current = next;
    }

    // === Queries ===

    /// True once any player has reached [`WINNING_PURSE`].
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The first player to reach [`WINNING_PURSE`].
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Questions dealt so far in `category`.
    #[must_use]
    pub fn questions_dealt(&self, category: Category) -> u32 {
        self.questions.dealt(category)
    }

    /// Text of Rock question `index`.
    #[must_use]
    pub fn create_rock_question(&self, index: i64) -> String {
        create_rock_question(index)
    }
}
