use std::ops::Index;

use crate::moves::Move;
use crate::state::State;

/// Handle of a node in the arena of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) parent: Option<NodeId>,
    /// `None` for the initial node
    pub(crate) mov: Option<Move>,
    pub(crate) dist: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn root(state: &'a State) -> Self {
        SearchNode {
            state,
            parent: None,
            mov: None,
            dist: 0,
        }
    }

    pub(crate) fn child(state: &'a State, parent: NodeId, mov: Move, dist: u32) -> Self {
        SearchNode {
            state,
            parent: Some(parent),
            mov: Some(mov),
            dist,
        }
    }
}

/// Nodes only point to their parents so a plain `Vec` is enough.
#[derive(Debug, Default)]
pub(crate) struct NodeArena<'a> {
    nodes: Vec<SearchNode<'a>>,
}

impl<'a> NodeArena<'a> {
    pub(crate) fn push(&mut self, node: SearchNode<'a>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<'a> Index<NodeId> for NodeArena<'a> {
    type Output = SearchNode<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
