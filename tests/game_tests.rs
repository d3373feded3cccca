//! Behavioural tests for the game engine, driven through the public API
//! and checked against rendered announcement lines.

use trivia_engine::{Game, PlayerId, Transcript};

fn start_two_player_game() -> Game<Transcript> {
    let mut game = Game::with_sink(Transcript::new());
    game.add_player("player1");
    game.add_player("player2");
    game
}

// =============================================================================
// Roster
// =============================================================================

#[test]
fn test_not_playable_without_players() {
    let game = Game::new();
    assert!(!game.is_playable());
}

#[test]
fn test_not_playable_with_one_player() {
    let mut game = Game::new();
    game.add_player("player");
    assert!(!game.is_playable());
}

#[test]
fn test_playable_with_two_or_more_players() {
    for player_count in 2..=5 {
        let mut game = Game::new();
        for i in 0..player_count {
            game.add_player(format!("player{}", i));
        }
        assert!(game.is_playable(), "{} players should be playable", player_count);
    }
}

#[test]
fn test_prints_name_of_added_player() {
    let mut game = Game::with_sink(Transcript::new());
    game.add_player("player");
    assert!(game.sink().contains("player was added"));
}

#[test]
fn test_prints_seat_of_added_player() {
    let mut game = Game::with_sink(Transcript::new());
    game.add_player("player");
    assert_eq!(game.sink().lines()[1], "They are player number 1");
}

#[test]
fn test_add_player_always_returns_true() {
    let mut game = Game::new();
    assert!(game.add_player("player"));
    assert!(game.add_player("player"));
    assert!(game.add_player(""));
}

#[test]
fn test_counts_players() {
    for to_add in 0..=2 {
        let mut game = Game::new();
        for _ in 0..to_add {
            game.add_player("");
        }
        assert_eq!(game.player_count(), to_add);
    }
}

// =============================================================================
// Questions
// =============================================================================

#[test]
fn test_creates_rock_question_with_index() {
    let game = Game::new();
    for index in [1, 42] {
        assert_eq!(game.create_rock_question(index), format!("Rock Question {}", index));
    }
}

// =============================================================================
// Rolling
// =============================================================================

#[test]
fn test_roll_prints_current_player() {
    let mut game = start_two_player_game();
    game.roll(1);
    assert!(game.sink().contains("player1 is the current player"));
}

#[test]
fn test_roll_prints_roll_value() {
    for roll in 1..=6 {
        let mut game = start_two_player_game();
        game.roll(roll);
        assert!(game.sink().contains(&format!("They have rolled a {}", roll)));
    }
}

#[test]
fn test_roll_prints_new_position() {
    let mut game = start_two_player_game();
    game.roll(1);
    assert!(game.sink().contains("player1's new location is 1"));
}

#[test]
fn test_roll_prints_category_and_first_question() {
    let expected = [
        (1, "Science"),
        (2, "Sports"),
        (3, "Rock"),
        (4, "Pop"),
        (5, "Science"),
        (6, "Sports"),
        (7, "Rock"),
        (8, "Pop"),
        (9, "Science"),
        (10, "Sports"),
        (11, "Rock"),
        (12, "Pop"),
    ];

    for (roll, category) in expected {
        let mut game = start_two_player_game();
        game.roll(roll);
        assert!(
            game.sink().contains(&format!("The category is {}", category)),
            "roll {} should land on {}",
            roll,
            category
        );
        assert!(game.sink().contains(&format!("{} Question 0", category)));
    }
}

#[test]
fn test_new_players_are_not_in_penalty_box() {
    let mut game = start_two_player_game();
    game.roll(42);
    assert!(!game.sink().contains("penalty box"));
}

// =============================================================================
// Answers
// =============================================================================

#[test]
fn test_wrong_answer_prints_message() {
    let mut game = start_two_player_game();
    game.wrong_answer();
    assert!(game.sink().contains("Question was incorrectly answered"));
}

#[test]
fn test_wrong_answer_always_returns_true() {
    let mut game = start_two_player_game();
    for _ in 0..10 {
        assert!(game.wrong_answer());
    }
}

#[test]
fn test_wrong_answer_sends_current_player_to_box() {
    let mut game = start_two_player_game();
    game.wrong_answer();
    assert!(game.sink().contains("player1 was sent to the penalty box"));
}

#[test]
fn test_wrong_answer_passes_turn() {
    let mut game = start_two_player_game();
    game.wrong_answer();
    game.wrong_answer();
    assert!(game.sink().contains("player2 was sent to the penalty box"));
}

#[test]
fn test_correct_answer_returns_true() {
    let mut game = start_two_player_game();
    assert!(game.was_correctly_answered());
}

#[test]
fn test_sixth_coin_returns_false() {
    let mut game = start_two_player_game();

    let mut result = true;
    for _ in 0..11 {
        result = game.was_correctly_answered();
    }

    assert!(!result);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(PlayerId::new(0)));
    assert!(game.sink().contains("player1 now has 6 Gold Coins."));
}

#[test]
fn test_escape_does_not_cost_extra_turn() {
    let mut game = start_two_player_game();
    game.wrong_answer(); // player1 boxed
    game.was_correctly_answered(); // player2

    game.roll(3);
    assert!(game.sink().contains("player1 is getting out of the penalty box"));
    game.was_correctly_answered();

    assert_eq!(game.current_player(), Some(PlayerId::new(1)));
    assert_eq!(game.player(PlayerId::new(0)).unwrap().purse(), 1);
}
