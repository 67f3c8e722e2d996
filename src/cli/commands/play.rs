//! Play command - Human versus computer on the console

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;

use super::parse_player;
use crate::{
    adapters::SearchAgent,
    cli::{human::HumanAgent, output::format_board},
    config::GameConfig,
    ports::Agent,
    search::Strategy,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Search strategy for the computer (prompted for if neither this nor
    /// --config is given)
    #[arg(long, short = 's', value_enum)]
    pub strategy: Option<Strategy>,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Mark the computer plays
    #[arg(long, value_parser = parse_player)]
    pub computer: Option<Player>,

    /// Human places the first mark
    #[arg(long, conflicts_with = "computer_first")]
    pub human_first: bool,

    /// Computer places the first mark
    #[arg(long)]
    pub computer_first: bool,

    /// JSON game configuration; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the config file (or defaults) with the command-line overrides
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(computer) = self.computer {
            config.computer = computer;
        }
        if self.human_first {
            config.human_first = true;
        }
        if self.computer_first {
            config.human_first = false;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.resolve_config()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if args.strategy.is_none() && args.config.is_none() {
        config.strategy = choose_strategy(&mut input, &mut output)?;
    }

    run_session(&config, input, output)?;
    Ok(())
}

/// Print the strategy menu and read a choice until a valid one is given
pub fn choose_strategy<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Strategy> {
    writeln!(output, "Available search algorithms:")?;
    for strategy in Strategy::ALL {
        writeln!(output, "{}. {}", strategy.number(), strategy.name())?;
    }

    loop {
        write!(output, "Choose search algorithm (1-{}): ", Strategy::ALL.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no search algorithm chosen");
        }
        match line.trim().parse().ok().and_then(Strategy::from_number) {
            Some(strategy) => return Ok(strategy),
            None => writeln!(output, "invalid choice, try again")?,
        }
    }
}

/// Run one interactive game.
///
/// Returns `None` when the game stopped early: the human closed the input
/// or the computer's strategy had no move to offer.
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
) -> Result<Option<GameOutcome>> {
    let mut game = Game::new(config.size, config.first_player());
    let mut computer = SearchAgent::new(config.strategy, config.search.clone());
    let mut human = HumanAgent::new("you".to_string(), input, output);
    writeln!(human.writer(), "Using {}", config.strategy)?;

    loop {
        write!(human.writer(), "\n{}", format_board(game.board()))?;

        if let Some(outcome) = game.outcome() {
            let message = match outcome {
                GameOutcome::Win(winner) if winner == config.computer => {
                    format!("{winner} (computer) wins!")
                }
                GameOutcome::Win(winner) => format!("{winner} (you) wins!"),
                GameOutcome::Draw => "Draw!".to_string(),
            };
            writeln!(human.writer(), "{message}")?;
            return Ok(Some(outcome));
        }

        let chosen = if game.to_move() == config.computer {
            writeln!(human.writer(), "Computer's turn...")?;
            computer.select_move(&game)?
        } else {
            human.select_move(&game)?
        };

        let Some(mv) = chosen else {
            writeln!(human.writer(), "Game over!")?;
            return Ok(None);
        };
        game.play(mv)?;
        if game.moves().last().is_some_and(|last| last.player == config.computer) {
            writeln!(human.writer(), "Computer plays {mv}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write as _};

    use super::*;
    use crate::config::SearchConfig;

    #[test]
    fn test_menu_choice() {
        let mut input = Cursor::new(b"9\nsix\n4\n".to_vec());
        let mut output = Vec::new();
        let strategy = choose_strategy(&mut input, &mut output).unwrap();
        assert_eq!(strategy, Strategy::IterativeDeepening);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("6. Depth-Limited Search"));
        assert_eq!(printed.matches("invalid choice").count(), 2);
    }

    #[test]
    fn test_menu_without_input_fails() {
        let mut input = Cursor::new(Vec::new());
        assert!(choose_strategy(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "size": 4, "computer": "X", "strategy": "depth-first", "search": {{ "depth_limit": 5 }} }}"#
        )
        .unwrap();

        let args = PlayArgs {
            config: Some(file.path().to_path_buf()),
            strategy: Some(Strategy::UniformCost),
            computer_first: true,
            ..PlayArgs::default()
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.computer, Player::X);
        assert_eq!(config.strategy, Strategy::UniformCost);
        assert!(!config.human_first);
        assert_eq!(config.search, SearchConfig::new().with_depth_limit(5));
    }

    #[test]
    fn test_session_stops_when_input_ends() {
        let config = GameConfig::default();
        let mut output = Vec::new();
        let outcome = run_session(&config, Cursor::new(b"1 1\n".to_vec()), &mut output).unwrap();
        assert_eq!(outcome, None);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Using Breadth-First Search"));
        assert!(printed.contains("Computer's turn..."));
        assert!(printed.contains("Computer plays"));
        assert!(printed.contains("Game over!"));
    }

    #[test]
    fn test_session_reports_computer_win() {
        // O plays first and wins along the top row while X fills the
        // bottom row in the order the human enters.
        let config = GameConfig {
            human_first: false,
            ..GameConfig::default()
        };
        let input = Cursor::new(b"2 0\n2 1\n".to_vec());
        let mut output = Vec::new();
        let outcome = run_session(&config, input, &mut output).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Win(Player::O)));
        assert!(String::from_utf8(output).unwrap().contains("O (computer) wins!"));
    }
}
