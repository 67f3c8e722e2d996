//! Configuration types for searches and games.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, search::Strategy, tictactoe::Player};

/// Default limit used by depth-limited search
pub const DEFAULT_LIMITED_DEPTH: usize = 3;

/// Tuning knobs for the depth-bounded strategies.
///
/// The queue-based strategies ignore this entirely.
///
/// # Examples
///
/// ```
/// use tictac_search::config::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_depth_limit(4)
///     .with_max_depth(6);
/// assert_eq!(config.depth_limit, Some(4));
/// assert_eq!(config.limited_depth, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Limit for plain depth-first search (`None` = unbounded)
    pub depth_limit: Option<usize>,
    /// Limit for depth-limited search
    pub limited_depth: usize,
    /// Largest limit iterative deepening tries (`None` = number of cells)
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            depth_limit: None,
            limited_depth: DEFAULT_LIMITED_DEPTH,
            max_depth: None,
        }
    }

    /// Bound plain depth-first search.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Set the limit used by depth-limited search.
    pub fn with_limited_depth(mut self, limit: usize) -> Self {
        self.limited_depth = limit;
        self
    }

    /// Cap the limits tried by iterative deepening.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for an interactive game.
///
/// Can be loaded from a JSON file; missing fields take their defaults.
///
/// ```json
/// { "size": 3, "computer": "O", "strategy": "uniform-cost",
///   "search": { "limited_depth": 4 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board
    pub size: usize,
    /// Mark the computer plays
    pub computer: Player,
    /// Whether the human places the first mark
    pub human_first: bool,
    /// Strategy the computer uses
    pub strategy: Strategy,
    pub search: SearchConfig,
}

impl GameConfig {
    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or holds
    /// values that fail [`GameConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        log::debug!("loaded game config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Check the configuration for values the game cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for a zero board size.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The mark the human plays
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    /// The mark that moves first
    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human()
        } else {
            self.computer
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            computer: Player::O,
            human_first: true,
            strategy: Strategy::BreadthFirst,
            search: SearchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.computer, Player::O);
        assert_eq!(config.human(), Player::X);
        assert_eq!(config.first_player(), Player::X);
        assert_eq!(config.search.limited_depth, DEFAULT_LIMITED_DEPTH);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "strategy": "uniform-cost", "human_first": false }"#)
                .unwrap();
        assert_eq!(config.strategy, Strategy::UniformCost);
        assert_eq!(config.first_player(), Player::O);
        assert_eq!(config.size, 3);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = GameConfig {
            size: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }
}
