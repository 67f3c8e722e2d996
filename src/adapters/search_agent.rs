//! Computer player driven by one of the search strategies

use crate::{
    Result,
    config::SearchConfig,
    ports::Agent,
    search::{self, SearchReport, Strategy},
    tictactoe::{Game, Move},
};

/// Plays whatever move its strategy recommends for the mark to move.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    name: String,
    strategy: Strategy,
    config: SearchConfig,
    last_report: Option<SearchReport>,
}

impl SearchAgent {
    pub fn new(strategy: Strategy, config: SearchConfig) -> Self {
        Self {
            name: strategy.name().to_string(),
            strategy,
            config,
            last_report: None,
        }
    }

    /// Override the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Report from the most recent search, if any
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, game: &Game) -> Result<Option<Move>> {
        let report = search::run(self.strategy, &game.state(), game.to_move(), &self.config);
        self.last_report = Some(report);
        Ok(report.result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Player};

    #[test]
    fn searches_for_the_mark_to_move() {
        let board = Board::from_string("XX./OO./...").unwrap();
        let game = Game::from_position(board, Player::O);
        let mut agent = SearchAgent::new(Strategy::BreadthFirst, SearchConfig::default());

        assert_eq!(agent.select_move(&game).unwrap(), Some(Move::new(1, 2)));
        let report = agent.last_report().unwrap();
        assert_eq!(report.strategy, Strategy::BreadthFirst);
        assert!(report.stats.expanded > 0);
    }

    #[test]
    fn finished_game_yields_no_move() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let game = Game::from_position(board, Player::O);
        let mut agent = SearchAgent::new(Strategy::UniformCost, SearchConfig::default());
        assert_eq!(agent.select_move(&game).unwrap(), None);
    }

    #[test]
    fn name_defaults_to_strategy_name() {
        let agent = SearchAgent::new(Strategy::Bidirectional, SearchConfig::default());
        assert_eq!(agent.name(), "Bidirectional Search");
        assert_eq!(agent.with_name("bidi").name(), "bidi");
    }
}
