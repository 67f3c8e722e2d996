//! Arena command - Pit a search strategy against another agent

use anyhow::Result;
use clap::Parser;

use super::{parse_player, solve::SearchArgs};
use crate::{
    adapters::{RandomAgent, SearchAgent},
    cli::output::{create_game_progress, print_kv, print_section},
    pipeline::{Arena, ArenaResult},
    ports::Agent,
    search::Strategy,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play repeated games between a strategy and an opponent")]
pub struct ArenaArgs {
    /// Strategy of the first agent
    #[arg(long, short = 's', value_enum)]
    pub strategy: Strategy,

    /// Opponent: "random" or a strategy name such as "depth-first"
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Mark the first agent holds in the first game
    #[arg(long, value_parser = parse_player, default_value = "x")]
    pub mark: Player,

    /// Swap marks after every game
    #[arg(long)]
    pub alternate: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Build the opponent named on the command line
pub fn create_opponent(
    spec: &str,
    seed: Option<u64>,
    search: &SearchArgs,
) -> Result<Box<dyn Agent>> {
    if spec.eq_ignore_ascii_case("random") {
        let name = "Random".to_string();
        return Ok(Box::new(match seed {
            Some(seed) => RandomAgent::with_seed(name, seed),
            None => RandomAgent::new(name),
        }));
    }

    let strategy = <Strategy as clap::ValueEnum>::from_str(spec, true).map_err(|_| {
        anyhow::anyhow!(
            "Unknown opponent: '{spec}'. Supported: random, breadth-first, depth-first, \
             uniform-cost, iterative-deepening, bidirectional, depth-limited"
        )
    })?;
    Ok(Box::new(SearchAgent::new(strategy, search.to_config())))
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    let mut first = SearchAgent::new(args.strategy, args.search.to_config());
    let mut second = create_opponent(&args.opponent, args.seed, &args.search)?;

    let arena = Arena::new(args.size)
        .with_first_mark(args.mark)
        .with_alternating_marks(args.alternate);

    let progress = if args.quiet {
        None
    } else {
        Some(create_game_progress(args.games as u64)?)
    };

    let result = arena.run(&mut first, second.as_mut(), args.games, |tally| {
        if let Some(pb) = &progress {
            pb.set_message(format!("W{} D{} L{}", tally.wins, tally.draws, tally.losses));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &ArenaResult) {
    print_section(&format!("{} vs {}", result.first, result.second));
    print_kv("Games", &result.total().to_string());
    print_kv("Wins", &result.wins.to_string());
    print_kv("Draws", &result.draws.to_string());
    print_kv("Losses", &result.losses.to_string());
    if result.unfinished > 0 {
        print_kv("Unfinished", &result.unfinished.to_string());
    }
    print_kv("Win rate", &format!("{:.1}%", result.win_rate() * 100.0));
}
