use std::fmt::{self, Display, Formatter};

use crate::config::Method;
use crate::moves::Moves;
use crate::state::State;

use super::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Nodes,
    Time,
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Limit::Nodes => write!(f, "node limit"),
            Limit::Time => write!(f, "time limit"),
        }
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    Solved,
    /// Every reachable state was explored without finding a goal.
    Exhausted,
    LimitExceeded(Limit),
}

impl Display for TerminalReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            TerminalReason::Solved => write!(f, "solved"),
            TerminalReason::Exhausted => write!(f, "exhausted"),
            TerminalReason::LimitExceeded(_) => write!(f, "limit_exceeded"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    method: Method,
    path: Vec<State>,
    moves: Moves,
    cost: u32,
    stats: Stats,
    reason: TerminalReason,
}

impl SearchResult {
    /// `path` goes from the initial state to the goal state, both inclusive.
    pub fn success(
        method: Method,
        path: Vec<State>,
        moves: Moves,
        cost: u32,
        stats: Stats,
    ) -> Self {
        debug_assert!(!path.is_empty());
        debug_assert_eq!(moves.move_cnt() + 1, path.len());
        SearchResult {
            method,
            path,
            moves,
            cost,
            stats,
            reason: TerminalReason::Solved,
        }
    }

    pub fn failure(method: Method, stats: Stats, reason: TerminalReason) -> Self {
        debug_assert_ne!(reason, TerminalReason::Solved);
        SearchResult {
            method,
            path: Vec::new(),
            moves: Moves::default(),
            cost: 0,
            stats,
            reason,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn is_success(&self) -> bool {
        self.reason == TerminalReason::Solved
    }

    /// Empty on failure.
    pub fn path(&self) -> &[State] {
        &self.path
    }

    pub fn moves(&self) -> &Moves {
        &self.moves
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn terminal_reason(&self) -> TerminalReason {
        self.reason
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} search: {}", self.method, self.reason)?;
        match self.reason {
            TerminalReason::Solved => {
                writeln!(f, "Solution cost: {}", self.cost)?;
                writeln!(f, "Path length: {} states", self.path.len())?;
            }
            TerminalReason::Exhausted => writeln!(f, "No solution")?,
            TerminalReason::LimitExceeded(limit) => writeln!(f, "Stopped by {}", limit)?,
        }
        writeln!(f, "Nodes expanded: {}", self.stats.nodes_expanded())?;
        writeln!(f, "Max frontier size: {}", self.stats.max_frontier())?;
        writeln!(
            f,
            "Processing time: {:.4} seconds",
            self.stats.elapsed().as_secs_f64()
        )
    }
}
