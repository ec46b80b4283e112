use crate::moves::Moves;
use crate::state::State;

use super::node::{NodeArena, NodeId};

/// Walks parent handles from `last` back to the initial node.
///
/// Returns the states from the initial one to `last` (inclusive)
/// and the moves between them.
pub(crate) fn reconstruct_path(nodes: &NodeArena<'_>, last: NodeId) -> (Vec<State>, Moves) {
    let mut states = Vec::new();
    let mut moves = Vec::new();

    let mut cur = Some(last);
    while let Some(id) = cur {
        let node = &nodes[id];
        states.push(node.state.clone());
        if let Some(mov) = node.mov {
            moves.push(mov);
        }
        cur = node.parent;
    }

    states.reverse();
    moves.reverse();
    (states, Moves::new(moves))
}
