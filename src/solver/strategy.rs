//! Frontier orderings. The engine owns the nodes, strategies only see handles.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;

use crate::config::Method;

use super::node::NodeId;

pub trait Strategy: Debug {
    fn method(&self) -> Method;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    fn needs_heuristic(&self) -> bool {
        self.method().needs_heuristic()
    }

    /// `h` is 0 for strategies which don't need a heuristic.
    fn add(&mut self, node: NodeId, dist: u32, h: u32);

    fn next(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes deeper than this must not be added.
    fn depth_limit(&self) -> Option<u32> {
        None
    }

    /// Raises the depth limit, returns the new one.
    fn deepen(&mut self) -> Option<u32> {
        None
    }
}

pub fn strategy_for(method: Method) -> Box<dyn Strategy> {
    match method {
        Method::Bfs => Box::new(Bfs::default()),
        Method::Dfs => Box::new(Dfs::default()),
        Method::Iddfs => Box::new(Iddfs::default()),
        Method::AStar => Box::new(AStar::default()),
        Method::Greedy => Box::new(Greedy::default()),
    }
}

#[derive(Debug, Default)]
pub struct Bfs {
    queue: VecDeque<NodeId>,
}

impl Strategy for Bfs {
    fn method(&self) -> Method {
        Method::Bfs
    }

    fn add(&mut self, node: NodeId, _dist: u32, _h: u32) {
        self.queue.push_back(node);
    }

    fn next(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug, Default)]
pub struct Dfs {
    stack: Vec<NodeId>,
}

impl Strategy for Dfs {
    fn method(&self) -> Method {
        Method::Dfs
    }

    fn add(&mut self, node: NodeId, _dist: u32, _h: u32) {
        self.stack.push(node);
    }

    fn next(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Depth-limited DFS. The engine restarts it from the initial state
/// with a higher limit while anything was cut off.
#[derive(Debug)]
pub struct Iddfs {
    stack: Vec<NodeId>,
    limit: u32,
    step: u32,
}

impl Iddfs {
    pub const INITIAL_LIMIT: u32 = 50;
    pub const STEP: u32 = 5;

    pub fn new(initial_limit: u32, step: u32) -> Self {
        Iddfs {
            stack: Vec::new(),
            limit: initial_limit,
            step: step.max(1),
        }
    }
}

impl Default for Iddfs {
    fn default() -> Self {
        Iddfs::new(Iddfs::INITIAL_LIMIT, Iddfs::STEP)
    }
}

impl Strategy for Iddfs {
    fn method(&self) -> Method {
        Method::Iddfs
    }

    fn add(&mut self, node: NodeId, dist: u32, _h: u32) {
        debug_assert!(dist <= self.limit);
        self.stack.push(node);
    }

    fn next(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn depth_limit(&self) -> Option<u32> {
        Some(self.limit)
    }

    fn deepen(&mut self) -> Option<u32> {
        self.limit += self.step;
        Some(self.limit)
    }
}

/// Lowest `dist + h` first, ties broken by lower `h`, then by insertion order.
#[derive(Debug, Default)]
pub struct AStar {
    heap: BinaryHeap<Reverse<(u32, u32, u64, NodeId)>>,
    inserted: u64,
}

impl Strategy for AStar {
    fn method(&self) -> Method {
        Method::AStar
    }

    fn add(&mut self, node: NodeId, dist: u32, h: u32) {
        self.heap.push(Reverse((dist + h, h, self.inserted, node)));
        self.inserted += 1;
    }

    fn next(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, _, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Lowest `h` first regardless of the cost so far, ties by insertion order.
#[derive(Debug, Default)]
pub struct Greedy {
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    inserted: u64,
}

impl Strategy for Greedy {
    fn method(&self) -> Method {
        Method::Greedy
    }

    fn add(&mut self, node: NodeId, _dist: u32, h: u32) {
        self.heap.push(Reverse((h, self.inserted, node)));
        self.inserted += 1;
    }

    fn next(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Pos;
    use crate::solver::node::{NodeArena, SearchNode};
    use crate::state::State;

    use super::*;

    fn ids(n: usize) -> Vec<NodeId> {
        // handles only come from an arena
        let state = State::new_unchecked(Pos::new(0, 0), vec![]);
        let mut arena = NodeArena::default();
        (0..n).map(|_| arena.push(SearchNode::root(&state))).collect()
    }

    fn drain(strategy: &mut dyn Strategy) -> Vec<NodeId> {
        let mut out = Vec::new();
        while let Some(id) = strategy.next() {
            out.push(id);
        }
        assert!(strategy.is_empty());
        out
    }

    #[test]
    fn fifo_and_lifo() {
        let ids = ids(3);

        let mut bfs = Bfs::default();
        let mut dfs = Dfs::default();
        for &id in &ids {
            bfs.add(id, 1, 7);
            dfs.add(id, 1, 7);
        }
        assert_eq!(bfs.len(), 3);
        assert_eq!(dfs.len(), 3);
        assert_eq!(drain(&mut bfs), vec![ids[0], ids[1], ids[2]]);
        assert_eq!(drain(&mut dfs), vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn a_star_order() {
        let ids = ids(5);
        let mut a_star = AStar::default();
        a_star.add(ids[0], 3, 3); // f 6
        a_star.add(ids[1], 1, 4); // f 5, h 4
        a_star.add(ids[2], 4, 1); // f 5, h 1
        a_star.add(ids[3], 2, 3); // f 5, h 3
        a_star.add(ids[4], 3, 1); // f 4
        assert_eq!(
            drain(&mut a_star),
            vec![ids[4], ids[2], ids[3], ids[1], ids[0]]
        );

        // full ties keep insertion order
        let mut a_star = AStar::default();
        for &id in &ids {
            a_star.add(id, 2, 2);
        }
        assert_eq!(drain(&mut a_star), ids);
    }

    #[test]
    fn greedy_ignores_cost() {
        let ids = ids(4);
        let mut greedy = Greedy::default();
        greedy.add(ids[0], 0, 5);
        greedy.add(ids[1], 100, 1);
        greedy.add(ids[2], 1, 3);
        greedy.add(ids[3], 50, 1);
        assert_eq!(drain(&mut greedy), vec![ids[1], ids[3], ids[2], ids[0]]);
    }

    #[test]
    fn iddfs_limits() {
        let mut iddfs = Iddfs::default();
        assert_eq!(iddfs.depth_limit(), Some(Iddfs::INITIAL_LIMIT));
        assert_eq!(iddfs.deepen(), Some(Iddfs::INITIAL_LIMIT + Iddfs::STEP));
        assert_eq!(iddfs.depth_limit(), Some(55));

        let mut iddfs = Iddfs::new(2, 3);
        let ids = ids(2);
        iddfs.add(ids[0], 1, 0);
        iddfs.add(ids[1], 2, 0);
        assert_eq!(drain(&mut iddfs), vec![ids[1], ids[0]]);
        assert_eq!(iddfs.deepen(), Some(5));
        assert_eq!(Bfs::default().depth_limit(), None);
        assert_eq!(Bfs::default().deepen(), None);
    }

    #[test]
    fn factory() {
        for &method in &[
            Method::Bfs,
            Method::Dfs,
            Method::Iddfs,
            Method::AStar,
            Method::Greedy,
        ] {
            let strategy = strategy_for(method);
            assert_eq!(strategy.method(), method);
            assert_eq!(strategy.name(), method.to_string());
            assert!(strategy.is_empty());
        }
        assert!(strategy_for(Method::AStar).needs_heuristic());
        assert!(strategy_for(Method::Greedy).needs_heuristic());
        assert!(!strategy_for(Method::Bfs).needs_heuristic());
        assert!(!strategy_for(Method::Iddfs).needs_heuristic());
    }
}
