use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use separator::Separatable;

/// Counters collected during one search, most of them split by depth.
///
/// Expanded states are the ones which passed the explored and deadlock checks,
/// duplicates are nodes popped after their state was already explored.
/// Pruned counts deadlocked states dropped when popped
/// and deadlocked pushes never generated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    expanded_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    pruned: u64,
    max_frontier: usize,
    elapsed: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.expanded_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn pruned(&self) -> u64 {
        self.pruned
    }

    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn expanded_by_depth(&self) -> &[u64] {
        &self.expanded_states
    }

    pub(crate) fn add_created(&mut self, dist: u32) -> bool {
        Self::add(&mut self.created_states, dist)
    }

    /// Returns true if this is the first state expanded at this depth.
    pub(crate) fn add_expanded(&mut self, dist: u32) -> bool {
        Self::add(&mut self.expanded_states, dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, dist: u32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    pub(crate) fn add_pruned(&mut self, count: u64) {
        self.pruned += count;
    }

    pub(crate) fn update_frontier(&mut self, frontier_len: usize) {
        self.max_frontier = self.max_frontier.max(frontier_len);
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    fn add(counts: &mut Vec<u64>, dist: u32) -> bool {
        let depth = dist as usize;
        let mut ret = false;

        // while because some depths might be skipped - e.g. only duplicates reached there
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let expanded = self.nodes_expanded();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Expanded total: {}", expanded.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Pruned deadlocks total: {}", self.pruned.separated_string())?;
        writeln!(
            f,
            "Max frontier size: {}",
            self.max_frontier.separated_string()
        )?;
        writeln!(f)?;

        writeln!(f, "Depth          Created        Expanded       Duplicates")?;
        // created is the longest, a state has to be created before it's expanded
        for i in 0..self.created_states.len() {
            let depth = format!("{}:", i);
            let expanded = self.expanded_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                depth,
                self.created_states[i].separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
            )?;
        }
        Ok(())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "pruned: {}", self.pruned)?;
        writeln!(f, "max frontier: {}", self.max_frontier)?;
        writeln!(f, "elapsed: {:?}", self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_expanded(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_created(3));
        assert!(stats.add_reached_duplicate(1));
        assert!(stats.add_expanded(1));
        assert!(!stats.add_expanded(1));
        stats.add_pruned(1);
        stats.add_pruned(0);
        stats.add_pruned(2);
        stats.update_frontier(5);
        stats.update_frontier(2);

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.nodes_expanded(), 3);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.pruned(), 3);
        assert_eq!(stats.max_frontier(), 5);
        assert_eq!(stats.expanded_by_depth(), &[1, 2]);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        stats.add_created(0);
        stats.add_expanded(0);
        for _ in 0..1500 {
            stats.add_created(1);
        }
        stats.add_reached_duplicate(1);
        stats.update_frontier(1499);

        let expected = r"States created total: 1,501
Expanded total: 1
Reached duplicates total: 1
Pruned deadlocks total: 0
Max frontier size: 1,499

Depth          Created        Expanded       Duplicates
0:             1              1              0
1:             1,500          0              1
";
        assert_eq!(stats.to_string(), expected);
    }
}
