//! Runner integration tests: full games played end to end.

use trivia_engine::{
    Event, GameError, GameSummary, NullSink, RandomRunner, RunnerConfig, ScriptedRunner,
    WINNING_PURSE,
};

#[test]
fn test_random_runner_is_deterministic() {
    let names = ["Chet", "Pat", "Sue"];
    let config = RunnerConfig::default().with_seed(1234);

    let (first, first_summary) = RandomRunner::new(names, config.clone()).run().unwrap();
    let (second, second_summary) = RandomRunner::new(names, config).run().unwrap();

    assert_eq!(first_summary, second_summary);
    assert_eq!(first.sink().events(), second.sink().events());
}

#[test]
fn test_random_runner_finishes_for_many_seeds() {
    for seed in 0..25 {
        let config = RunnerConfig::default().with_seed(seed).with_max_turns(10_000);
        let (game, summary) = RandomRunner::new(["a", "b", "c", "d"], config)
            .run_with(NullSink)
            .unwrap();

        assert!(game.is_game_over(), "seed {} did not finish", seed);
        assert_eq!(game.winner(), Some(summary.winner));
        assert_eq!(summary.purses[summary.winner.index()], WINNING_PURSE);
        assert!(summary.purses.iter().all(|&coins| coins <= WINNING_PURSE));
    }
}

#[test]
fn test_random_rolls_stay_on_die() {
    let config = RunnerConfig::default().with_seed(9).with_die_faces(4);
    let (game, _) = RandomRunner::new(["a", "b"], config).run().unwrap();

    for event in game.sink().events() {
        if let Event::Rolled { amount } = event {
            assert!((1..=4).contains(amount), "rolled {}", amount);
        }
    }
}

#[test]
fn test_scripted_runner_with_closure_sink() {
    let mut lines = Vec::new();
    {
        let sink = |event: &Event| lines.push(event.to_string());
        ScriptedRunner::new(["player1", "player2"]).run_with(sink).unwrap();
    }

    assert_eq!(lines.first().map(String::as_str), Some("player1 was added"));
    assert_eq!(lines.last().map(String::as_str), Some("player1 now has 6 Gold Coins."));
}

#[test]
fn test_runners_reject_single_player() {
    assert_eq!(
        ScriptedRunner::new(["solo"]).run().unwrap_err(),
        GameError::NotPlayable { players: 1 }
    );
    assert_eq!(
        RandomRunner::new(["solo"], RunnerConfig::default()).run().unwrap_err(),
        GameError::NotPlayable { players: 1 }
    );
}

#[test]
fn test_summary_names_winner() {
    let (game, summary) = ScriptedRunner::new(["player1", "player2", "player3"])
        .run()
        .unwrap();

    assert_eq!(summary.winner, game.winner().unwrap());
    let winner = game.player(summary.winner).unwrap();
    assert_eq!(winner.name(), summary.winner_name);
    assert_eq!(winner.purse(), WINNING_PURSE);
}

#[test]
fn test_summary_serialization() {
    let (_, summary) = ScriptedRunner::new(["player1", "player2"]).run().unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let deserialized: GameSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, deserialized);
}
