//! Matches between agents

use serde::Serialize;

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Game, GameOutcome, Player},
};

/// Play `game` to the end with `x` and `o` choosing moves for their marks.
///
/// Returns `None` when an agent declines to move before the game is over.
/// A move onto an occupied or out-of-range cell is reported as
/// [`Error::IllegalAgentMove`].
pub fn play_match(
    game: &mut Game,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
) -> Result<Option<GameOutcome>> {
    while !game.is_over() {
        let agent: &mut dyn Agent = match game.to_move() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let Some(mv) = agent.select_move(game)? else {
            log::warn!("{} declined to move on an unfinished game", agent.name());
            return Ok(None);
        };

        if !game.board().contains(mv) || !game.board().is_empty(mv) {
            return Err(Error::IllegalAgentMove {
                agent: agent.name().to_string(),
                row: mv.row,
                col: mv.col,
            });
        }
        log::trace!("{} plays {mv}", agent.name());
        game.play(mv)?;
    }
    Ok(game.outcome())
}

/// Tally of an arena run, from the first agent's point of view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArenaResult {
    pub first: String,
    pub second: String,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Games abandoned because an agent had no move
    pub unfinished: usize,
}

impl ArenaResult {
    pub fn new(first: String, second: String) -> Self {
        Self {
            first,
            second,
            ..Default::default()
        }
    }

    /// Record one game in which the first agent held `mark`
    pub fn record(&mut self, mark: Player, outcome: Option<GameOutcome>) {
        match outcome {
            Some(GameOutcome::Win(winner)) if winner == mark => self.wins += 1,
            Some(GameOutcome::Win(_)) => self.losses += 1,
            Some(GameOutcome::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses + self.unfinished
    }

    /// Fraction of games the first agent won
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.wins as f64 / total as f64,
        }
    }
}

/// Repeated matches between two agents
#[derive(Debug, Clone)]
pub struct Arena {
    size: usize,
    first_mark: Player,
    alternate: bool,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Arena {
    /// Games on a `size` x `size` board; the first agent plays X and X
    /// always opens.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            first_mark: Player::X,
            alternate: false,
        }
    }

    /// Mark held by the first agent in the first game
    pub fn with_first_mark(mut self, mark: Player) -> Self {
        self.first_mark = mark;
        self
    }

    /// Swap marks after every game
    pub fn with_alternating_marks(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    /// Play `games` matches, calling `on_game` after each one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero board size, and
    /// any error raised while playing a match.
    pub fn run(
        &self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
        games: usize,
        mut on_game: impl FnMut(&ArenaResult),
    ) -> Result<ArenaResult> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }

        let mut result = ArenaResult::new(first.name().to_string(), second.name().to_string());
        let mut mark = self.first_mark;

        for index in 0..games {
            let mut game = Game::new(self.size, Player::X);
            let outcome = match mark {
                Player::X => play_match(&mut game, first, second)?,
                Player::O => play_match(&mut game, second, first)?,
            };
            log::debug!("game {} ({} as {mark}): {outcome:?}", index + 1, result.first);
            result.record(mark, outcome);
            on_game(&result);

            if self.alternate {
                mark = mark.opponent();
            }
        }

        log::info!(
            "{} vs {}: {} wins, {} draws, {} losses, {} unfinished",
            result.first,
            result.second,
            result.wins,
            result.draws,
            result.losses,
            result.unfinished
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{RandomAgent, SearchAgent},
        config::SearchConfig,
        search::Strategy,
        tictactoe::{Board, Move},
    };

    /// Always plays the same cell
    struct Stubborn(Move);

    impl Agent for Stubborn {
        fn select_move(&mut self, _: &Game) -> Result<Option<Move>> {
            Ok(Some(self.0))
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    /// Never moves
    struct Idle;

    impl Agent for Idle {
        fn select_move(&mut self, _: &Game) -> Result<Option<Move>> {
            Ok(None)
        }

        fn name(&self) -> &str {
            "idle"
        }
    }

    #[test]
    fn match_finishes_with_an_outcome() {
        let mut game = Game::new(3, Player::X);
        let mut x = RandomAgent::with_seed("x".to_string(), 1);
        let mut o = RandomAgent::with_seed("o".to_string(), 2);
        let outcome = play_match(&mut game, &mut x, &mut o).unwrap();
        assert!(outcome.is_some());
        assert_eq!(outcome, game.outcome());
    }

    #[test]
    fn search_agent_takes_an_open_win() {
        let board = Board::from_string("XX./OO./...").unwrap();
        let mut game = Game::from_position(board, Player::O);
        let mut x = Idle;
        let mut o = SearchAgent::new(Strategy::BreadthFirst, SearchConfig::default());
        let outcome = play_match(&mut game, &mut x, &mut o).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn declined_move_leaves_match_unfinished() {
        let mut game = Game::new(3, Player::X);
        let outcome = play_match(&mut game, &mut Idle, &mut Idle).unwrap();
        assert_eq!(outcome, None);
        assert!(!game.is_over());
    }

    #[test]
    fn occupied_cell_is_an_illegal_agent_move() {
        let mut game = Game::new(3, Player::X);
        let mut x = Stubborn(Move::new(0, 0));
        let mut o = Stubborn(Move::new(0, 0));
        let err = play_match(&mut game, &mut x, &mut o).unwrap_err();
        assert!(matches!(err, Error::IllegalAgentMove { row: 0, col: 0, .. }));
    }

    #[test]
    fn result_counts_from_first_agent_view() {
        let mut result = ArenaResult::new("a".to_string(), "b".to_string());
        result.record(Player::X, Some(GameOutcome::Win(Player::X)));
        result.record(Player::O, Some(GameOutcome::Win(Player::X)));
        result.record(Player::O, Some(GameOutcome::Draw));
        result.record(Player::X, None);
        assert_eq!((result.wins, result.losses, result.draws, result.unfinished), (1, 1, 1, 1));
        assert_eq!(result.total(), 4);
        assert!((result.win_rate() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn arena_plays_requested_games() {
        let arena = Arena::new(3).with_alternating_marks(true);
        let mut first = SearchAgent::new(Strategy::UniformCost, SearchConfig::default());
        let mut second = RandomAgent::with_seed("random".to_string(), 9);
        let mut seen = 0;
        let result = arena
            .run(&mut first, &mut second, 6, |_| seen += 1)
            .unwrap();
        assert_eq!(seen, 6);
        assert_eq!(result.total(), 6);
        assert_eq!(result.second, "random");
    }

    #[test]
    fn zero_size_board_is_rejected() {
        let mut first = RandomAgent::with_seed("a".to_string(), 1);
        let mut second = RandomAgent::with_seed("b".to_string(), 2);
        let mut seen = 0;
        let err = Arena::new(0)
            .run(&mut first, &mut second, 3, |_| seen += 1)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert_eq!(seen, 0);
    }
}
