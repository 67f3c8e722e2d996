//! Uninformed graph searches that pick a move for the computer.
//!
//! Every strategy answers the same question: which first move leads toward
//! a position where the target mark has a full line? The searches are
//! cooperative, not adversarial: each ply is expanded with the mark of
//! whoever is to move, as if both sides were working toward the target's
//! win. This is not minimax.
//!
//! All strategies share the same contract:
//! - a terminal initial state yields `None` without searching
//! - moves are generated from empty cells in row-major order
//! - `None` means "no move found", never an error
//!
//! Frontiers and visited sets live only for the duration of one call, and
//! grow without bound on large boards.

use std::{fmt, rc::Rc};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    config::SearchConfig,
    tictactoe::{GameState, Move, Player},
};

pub mod bidirectional;
pub mod breadth_first;
pub mod depth_first;
pub mod depth_limited;
pub mod iterative_deepening;
pub mod uniform_cost;

/// A recommended move, or `None` when the search found nothing
pub type SearchResult = Option<Move>;

/// Shared signature every strategy is dispatched through
pub type Searcher = fn(&Rc<GameState>, Player, &SearchConfig) -> (SearchResult, SearchStats);

/// Counters collected while a search runs.
///
/// These never influence the chosen move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States whose successors were generated
    pub expanded: usize,
    /// Successor states created
    pub generated: usize,
    /// Largest frontier (queue, heap or stack) seen
    pub peak_frontier: usize,
    /// Deepest relative depth at which a state was expanded
    pub max_depth: usize,
}

impl SearchStats {
    pub(crate) fn record_expansion(&mut self, depth: usize) {
        self.expanded += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn record_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }

    /// Fold the counters of another run into this one
    pub(crate) fn absorb(&mut self, other: &SearchStats) {
        self.expanded += other.expanded;
        self.generated += other.generated;
        self.peak_frontier = self.peak_frontier.max(other.peak_frontier);
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={} generated={} peak_frontier={} max_depth={}",
            self.expanded, self.generated, self.peak_frontier, self.max_depth
        )
    }
}

/// Outcome of dispatching one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// The six interchangeable search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    IterativeDeepening,
    Bidirectional,
    DepthLimited,
}

impl Strategy {
    /// All strategies in menu order
    pub const ALL: [Strategy; 6] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::IterativeDeepening,
        Strategy::Bidirectional,
        Strategy::DepthLimited,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::UniformCost => "Uniform Cost Search",
            Strategy::IterativeDeepening => "Iterative Deepening Search",
            Strategy::Bidirectional => "Bidirectional Search",
            Strategy::DepthLimited => "Depth-Limited Search",
        }
    }

    /// Menu number (1-6)
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .map_or(0, |i| i + 1)
    }

    /// Look up a strategy by menu number
    pub fn from_number(number: usize) -> Option<Strategy> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// The search function behind this strategy
    pub fn searcher(self) -> Searcher {
        match self {
            Strategy::BreadthFirst => breadth_first_searcher,
            Strategy::DepthFirst => depth_first_searcher,
            Strategy::UniformCost => uniform_cost_searcher,
            Strategy::IterativeDeepening => iterative_deepening_searcher,
            Strategy::Bidirectional => bidirectional_searcher,
            Strategy::DepthLimited => depth_limited_searcher,
        }
    }
}

fn breadth_first_searcher(
    initial: &Rc<GameState>,
    target: Player,
    _: &SearchConfig,
) -> (SearchResult, SearchStats) {
    breadth_first::search_with_stats(initial, target)
}

fn depth_first_searcher(
    initial: &Rc<GameState>,
    target: Player,
    config: &SearchConfig,
) -> (SearchResult, SearchStats) {
    depth_first::search_with_stats(initial, target, config.depth_limit)
}

fn uniform_cost_searcher(
    initial: &Rc<GameState>,
    target: Player,
    _: &SearchConfig,
) -> (SearchResult, SearchStats) {
    uniform_cost::search_with_stats(initial, target)
}

fn iterative_deepening_searcher(
    initial: &Rc<GameState>,
    target: Player,
    config: &SearchConfig,
) -> (SearchResult, SearchStats) {
    iterative_deepening::search_with_stats(initial, target, config.max_depth)
}

fn bidirectional_searcher(
    initial: &Rc<GameState>,
    target: Player,
    _: &SearchConfig,
) -> (SearchResult, SearchStats) {
    bidirectional::search_with_stats(initial, target)
}

fn depth_limited_searcher(
    initial: &Rc<GameState>,
    target: Player,
    config: &SearchConfig,
) -> (SearchResult, SearchStats) {
    depth_limited::search_with_stats(initial, target, config.limited_depth)
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `strategy` from `initial`, looking for a win for `target`
pub fn run(
    strategy: Strategy,
    initial: &Rc<GameState>,
    target: Player,
    config: &SearchConfig,
) -> SearchReport {
    let (result, stats) = (strategy.searcher())(initial, target, config);
    match result {
        Some(mv) => log::debug!("{strategy} for {target}: {mv} [{stats}]"),
        None => log::debug!("{strategy} for {target}: no move [{stats}]"),
    }
    SearchReport {
        strategy,
        result,
        stats,
    }
}

/// Default answer when a search runs dry: the first empty cell of the
/// initial state, or `None` on a full board.
pub(crate) fn fallback(initial: &GameState) -> SearchResult {
    let mv = initial.empty_cells().first().copied();
    log::trace!("no winning line found, falling back to {mv:?}");
    mv
}

/// A frontier entry for the queue-based strategies: a state plus the first
/// move taken from the search root to reach it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) state: Rc<GameState>,
    pub(crate) first: Option<Move>,
}

impl Node {
    pub(crate) fn root(state: &Rc<GameState>) -> Self {
        Self {
            state: Rc::clone(state),
            first: None,
        }
    }

    /// Child entry reached through `mv`; the root's children start the path
    pub(crate) fn child(&self, mv: Move, state: Rc<GameState>) -> Self {
        Self {
            state,
            first: self.first.or(Some(mv)),
        }
    }
}

/// Depth of `state` relative to the search root
pub(crate) fn relative_depth(state: &GameState, root: &GameState) -> usize {
    state.depth().saturating_sub(root.depth())
}
