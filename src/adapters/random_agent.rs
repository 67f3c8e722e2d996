//! Random baseline player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Game, Move},
};

/// Picks a uniformly random empty cell
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, game: &Game) -> Result<Option<Move>> {
        if game.is_over() {
            return Ok(None);
        }
        let moves = game.board().empty_cells();
        if moves.is_empty() {
            return Ok(None);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(Some(moves[index]))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn same_seed_same_moves() {
        let game = Game::new(3, Player::X);
        let mut a = RandomAgent::with_seed("a".to_string(), 42);
        let mut b = RandomAgent::with_seed("b".to_string(), 42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&game).unwrap(), b.select_move(&game).unwrap());
        }
    }

    #[test]
    fn only_picks_empty_cells() {
        let mut game = Game::new(3, Player::X);
        let mut agent = RandomAgent::with_seed("r".to_string(), 3);
        while let Some(mv) = agent.select_move(&game).unwrap() {
            assert!(game.board().is_empty(mv));
            game.play(mv).unwrap();
        }
        assert!(game.is_over());
    }
}
