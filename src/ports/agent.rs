//! Agent port - anything that can choose a move on the live board

use crate::{
    Result,
    tictactoe::{Game, Move},
};

/// Agent trait - unified interface for every kind of player
///
/// Humans, search-driven computer players and random baselines all sit
/// behind this trait, so the game loop never needs to know which one it is
/// talking to.
///
/// # Examples
///
/// ```
/// use tictac_search::{
///     adapters::RandomAgent,
///     ports::Agent,
///     tictactoe::{Game, Player},
/// };
///
/// let mut agent = RandomAgent::with_seed("random".to_string(), 7);
/// let game = Game::new(3, Player::X);
/// let mv = agent.select_move(&game)?.expect("empty board has moves");
/// assert!(game.board().is_empty(mv));
/// # Ok::<(), tictac_search::Error>(())
/// ```
pub trait Agent {
    /// Choose a move for the player whose turn it is in `game`.
    ///
    /// `Ok(None)` means the agent has no move to offer; the caller treats
    /// that as the end of the game, not as a failure.
    ///
    /// # Errors
    ///
    /// Returns an error when the agent cannot produce an answer at all,
    /// such as an unreadable input stream.
    fn select_move(&mut self, game: &Game) -> Result<Option<Move>>;

    /// Get the agent's name.
    ///
    /// Used for identification in prompts, comparisons and logging.
    fn name(&self) -> &str;
}
