mod backtracking;
mod node;
pub mod result;
pub mod stats;
pub mod strategy;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

use fnv::FnvHashSet;
use log::{debug, warn};
use typed_arena::Arena;

use crate::config::{Config, Method};
use crate::deadlock;
use crate::heuristic::{heuristic_for, Heuristic};
use crate::level::Level;
use crate::map::GameMap;
use crate::state::State;
use crate::Solve;

use self::node::{NodeArena, SearchNode};

pub use self::node::NodeId;
pub use self::result::{Limit, SearchResult, TerminalReason};
pub use self::stats::Stats;
pub use self::strategy::{strategy_for, AStar, Bfs, Dfs, Greedy, Iddfs, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    MissingHeuristic(Method),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::MissingHeuristic(method) => {
                write!(f, "{} needs a heuristic but none was given", method)
            }
        }
    }
}

impl Error for SolverErr {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Max number of expanded nodes
    pub nodes: Option<u64>,
    /// Max wall clock time
    pub time: Option<Duration>,
}

impl Limits {
    fn exceeded(&self, stats: &Stats, start: Instant) -> Option<Limit> {
        if let Some(max) = self.nodes {
            if stats.nodes_expanded() >= max {
                return Some(Limit::Nodes);
            }
        }
        if let Some(max) = self.time {
            if start.elapsed() >= max {
                return Some(Limit::Time);
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub pruning: bool,
    pub limits: Limits,
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> Result<SearchResult, SolverErr> {
        solve(self, config)
    }
}

pub fn solve(level: &Level, config: &Config) -> Result<SearchResult, SolverErr> {
    let mut strategy = strategy_for(config.method);
    let heuristic = config.heuristic.map(heuristic_for);
    if strategy.needs_heuristic() && heuristic.is_none() {
        return Err(SolverErr::MissingHeuristic(config.method));
    }

    Ok(search(
        &level.map,
        &level.state,
        strategy.as_mut(),
        heuristic.as_deref(),
        config.search_options(),
    ))
}

/// Runs `strategy` from `initial` until it reaches a goal state,
/// runs out of states or hits one of the limits.
///
/// Every state is expanded at most once (per iteration for depth-limited strategies).
pub fn search(
    map: &GameMap,
    initial: &State,
    strategy: &mut dyn Strategy,
    heuristic: Option<&dyn Heuristic>,
    options: SearchOptions,
) -> SearchResult {
    debug!("Search called with {}", strategy.name());

    let method = strategy.method();
    let heuristic = match heuristic {
        Some(h) if !strategy.needs_heuristic() => {
            warn!("{} doesn't use a heuristic, ignoring {:?}", strategy.name(), h);
            None
        }
        h => h,
    };
    let estimate = |state: &State| heuristic.map_or(0, |h| h.estimate(map, state));

    let start = Instant::now();
    let mut stats = Stats::new();

    // all states live until the search ends so nodes and the explored set can borrow them
    let states = Arena::new();
    let mut nodes = NodeArena::default();
    let mut explored: FnvHashSet<&State> = FnvHashSet::default();

    let root_state: &State = states.alloc(initial.clone());
    let root_h = estimate(root_state);
    let root = nodes.push(SearchNode::root(root_state));
    stats.add_created(0);
    strategy.add(root, 0, root_h);

    // whether a depth-limited strategy dropped anything this iteration
    let mut cutoff = false;

    loop {
        if let Some(limit) = options.limits.exceeded(&stats, start) {
            debug!("Stopped by {}", limit);
            stats.set_elapsed(start.elapsed());
            return SearchResult::failure(method, stats, TerminalReason::LimitExceeded(limit));
        }

        let frontier_len = strategy.len();
        let cur = match strategy.next() {
            Some(cur) => cur,
            None if cutoff => {
                cutoff = false;
                if let Some(limit) = strategy.deepen() {
                    debug!("Deepening to {}", limit);
                }
                explored.clear();
                nodes.clear();
                let root = nodes.push(SearchNode::root(root_state));
                strategy.add(root, 0, root_h);
                continue;
            }
            None => break,
        };

        let cur_state = nodes[cur].state;
        let cur_dist = nodes[cur].dist;

        if !explored.insert(cur_state) {
            stats.add_reached_duplicate(cur_dist);
            continue;
        }

        if options.pruning && deadlock::is_deadlocked(map, cur_state) {
            stats.add_pruned(1);
            continue;
        }

        if stats.add_expanded(cur_dist) {
            debug!("Visited new depth: {}", cur_dist);
        }
        stats.update_frontier(frontier_len);

        if cur_state.is_goal(map) {
            debug!("Solved, backtracking path");
            let (path, moves) = backtracking::reconstruct_path(&nodes, cur);
            stats.set_elapsed(start.elapsed());
            return SearchResult::success(method, path, moves, cur_dist, stats);
        }

        let child_dist = cur_dist + 1;
        let mut successors = cur_state.successors(map, options.pruning);
        for (mov, child) in successors.by_ref() {
            if explored.contains(&child) {
                continue;
            }
            if let Some(limit) = strategy.depth_limit() {
                if child_dist > limit {
                    cutoff = true;
                    break;
                }
            }

            let child: &State = states.alloc(child);
            let h = estimate(child);
            let child_id = nodes.push(SearchNode::child(child, cur, mov, child_dist));
            stats.add_created(child_dist);
            strategy.add(child_id, child_dist, h);
        }
        stats.add_pruned(successors.pruned());
    }

    debug!("Exhausted");
    stats.set_elapsed(start.elapsed());
    SearchResult::failure(method, stats, TerminalReason::Exhausted)
}
