//! Games between agents and configuration loading

use std::io::Write;

use tictac_search::{
    Error,
    adapters::{RandomAgent, SearchAgent},
    config::{GameConfig, SearchConfig},
    pipeline::{Arena, play_match},
    search::Strategy,
    tictactoe::{Game, GameOutcome, Player},
};

#[test]
fn test_every_strategy_finishes_a_game_against_random() {
    for strategy in Strategy::ALL {
        let mut game = Game::new(3, Player::X);
        let mut x = RandomAgent::with_seed("random".to_string(), strategy.number() as u64);
        let mut o = SearchAgent::new(strategy, SearchConfig::default());
        let outcome = play_match(&mut game, &mut x, &mut o).unwrap();

        // Only the strategies without a fallback may run out of moves
        match strategy {
            Strategy::DepthFirst | Strategy::DepthLimited => {
                assert_eq!(outcome.is_some(), game.is_over());
            }
            _ => assert!(outcome.is_some(), "{strategy} stopped early"),
        }
        for played in game.moves() {
            assert!(game.board().contains(played.mv));
        }
    }
}

#[test]
fn test_search_matches_are_deterministic() {
    let play = || {
        let mut game = Game::new(3, Player::X);
        let mut x = SearchAgent::new(Strategy::UniformCost, SearchConfig::default());
        let mut o = SearchAgent::new(Strategy::BreadthFirst, SearchConfig::default());
        let outcome = play_match(&mut game, &mut x, &mut o).unwrap();
        (outcome, game.moves().to_vec())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_arena_tallies_every_game() {
    let arena = Arena::new(3).with_alternating_marks(true);
    let mut first = SearchAgent::new(Strategy::IterativeDeepening, SearchConfig::default());
    let mut second = RandomAgent::with_seed("random".to_string(), 17);
    let result = arena.run(&mut first, &mut second, 10, |_| {}).unwrap();

    assert_eq!(result.total(), 10);
    assert_eq!(result.unfinished, 0);
    assert_eq!(result.first, "Iterative Deepening Search");
}

#[test]
fn test_arena_on_a_larger_board() {
    let arena = Arena::new(4).with_first_mark(Player::O);
    let mut first = RandomAgent::with_seed("a".to_string(), 1);
    let mut second = RandomAgent::with_seed("b".to_string(), 2);
    let result = arena.run(&mut first, &mut second, 5, |_| {}).unwrap();
    assert_eq!(result.wins + result.draws + result.losses, 5);
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut game = Game::new(3, Player::X);
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.play(tictac_search::Move::new(row, col)).unwrap();
    }
    assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    assert!(matches!(
        game.play(tictac_search::Move::new(2, 2)),
        Err(Error::GameOver)
    ));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "size": 4,
            "computer": "X",
            "human_first": false,
            "strategy": "bidirectional",
            "search": {{ "limited_depth": 5, "max_depth": 6 }}
        }}"#
    )
    .unwrap();

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.size, 4);
    assert_eq!(config.computer, Player::X);
    assert_eq!(config.first_player(), Player::X);
    assert_eq!(config.strategy, Strategy::Bidirectional);
    assert_eq!(
        config.search,
        SearchConfig::new().with_limited_depth(5).with_max_depth(6)
    );
}

#[test]
fn test_load_config_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(GameConfig::load(&missing), Err(Error::Io { .. })));

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "{ size: ").unwrap();
    assert!(matches!(
        GameConfig::load(&garbled),
        Err(Error::Serialization(_))
    ));

    let zero = dir.path().join("zero.json");
    std::fs::write(&zero, r#"{ "size": 0 }"#).unwrap();
    assert!(matches!(
        GameConfig::load(&zero),
        Err(Error::InvalidConfiguration { .. })
    ));

    let unknown = dir.path().join("unknown.json");
    std::fs::write(&unknown, r#"{ "strategy": "minimax" }"#).unwrap();
    assert!(GameConfig::load(&unknown).is_err());
}
