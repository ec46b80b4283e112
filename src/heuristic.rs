use std::fmt::Debug;

use crate::config::HeuristicKind;
use crate::data::Pos;
use crate::map::GameMap;
use crate::state::State;

/// Estimates the remaining cost from a state to a goal state.
///
/// Informed strategies order their frontier by it, the others never call it.
pub trait Heuristic: Debug {
    fn estimate(&self, map: &GameMap, state: &State) -> u32;
}

pub fn heuristic_for(kind: HeuristicKind) -> Box<dyn Heuristic> {
    match kind {
        HeuristicKind::Manhattan => Box::new(Manhattan),
        HeuristicKind::GreedyMatching => Box::new(GreedyMatching),
        HeuristicKind::SumOfDistance => Box::new(SumOfDistance),
    }
}

/// Sum of distances from every box to its closest goal.
///
/// Several boxes may count the same goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, map: &GameMap, state: &State) -> u32 {
        state
            .boxes()
            .iter()
            .map(|&b| closest_goal_dist(map, b))
            .sum()
    }
}

fn closest_goal_dist(map: &GameMap, pos: Pos) -> u32 {
    map.goals().iter().map(|&g| pos.dist(g)).min().unwrap_or(0)
}

/// Pairs boxes with goals one to one, always taking the closest remaining pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMatching;

impl Heuristic for GreedyMatching {
    fn estimate(&self, map: &GameMap, state: &State) -> u32 {
        let boxes = state.boxes();
        let goals = map.goals();

        let mut pairs = Vec::with_capacity(boxes.len() * goals.len());
        for (bi, &b) in boxes.iter().enumerate() {
            for (gi, &g) in goals.iter().enumerate() {
                pairs.push((b.dist(g), bi, gi));
            }
        }
        pairs.sort();

        let mut box_matched = vec![false; boxes.len()];
        let mut goal_matched = vec![false; goals.len()];
        let mut matched = 0;
        let mut total = 0;
        for (dist, bi, gi) in pairs {
            if matched == boxes.len() {
                break;
            }
            if box_matched[bi] || goal_matched[gi] {
                continue;
            }
            box_matched[bi] = true;
            goal_matched[gi] = true;
            matched += 1;
            total += dist;
        }
        total
    }
}

/// Player distance to the nearest box off goal plus the cheapest
/// one to one assignment of boxes off goal to free goals.
///
/// Not admissible, the player term can overestimate by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfDistance;

impl Heuristic for SumOfDistance {
    fn estimate(&self, map: &GameMap, state: &State) -> u32 {
        let boxes: Vec<Pos> = state
            .boxes()
            .iter()
            .cloned()
            .filter(|&b| !map.is_goal(b))
            .collect();
        if boxes.is_empty() {
            return 0;
        }
        let goals: Vec<Pos> = map
            .goals()
            .iter()
            .cloned()
            .filter(|&g| !state.has_box(g))
            .collect();

        let player_pos = state.player_pos();
        let to_box = boxes.iter().map(|&b| player_pos.dist(b)).min().unwrap_or(0);

        // square matrix, unmatched boxes or goals (partial states) cost nothing
        let n = boxes.len().max(goals.len());
        let mut costs = vec![vec![0; n]; n];
        for (bi, &b) in boxes.iter().enumerate() {
            for (gi, &g) in goals.iter().enumerate() {
                costs[bi][gi] = b.dist(g);
            }
        }
        to_box + min_cost_assignment(&costs)
    }
}

/// Hungarian method on a square cost matrix, O(n^3).
///
/// Rows and columns are 1-based internally, 0 is a virtual column
/// used while augmenting.
fn min_cost_assignment(costs: &[Vec<u32>]) -> u32 {
    let n = costs.len();
    let inf = i64::max_value();
    let mut row_pot = vec![0i64; n + 1];
    let mut col_pot = vec![0i64; n + 1];
    // row assigned to each column, 0 if none
    let mut col_row = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        col_row[0] = row;
        let mut col = 0;
        let mut min_slack = vec![inf; n + 1];
        let mut used = vec![false; n + 1];
        loop {
            used[col] = true;
            let cur_row = col_row[col];
            let mut delta = inf;
            let mut next_col = 0;
            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let slack =
                    i64::from(costs[cur_row - 1][j - 1]) - row_pot[cur_row] - col_pot[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = col;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    next_col = j;
                }
            }
            for j in 0..=n {
                if used[j] {
                    row_pot[col_row[j]] += delta;
                    col_pot[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }
            col = next_col;
            if col_row[col] == 0 {
                break;
            }
        }
        // flip the augmenting path
        while col != 0 {
            let prev = way[col];
            col_row[col] = col_row[prev];
            col = prev;
        }
    }

    (1..=n).map(|j| costs[col_row[j] - 1][j - 1]).sum()
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn zero_on_goal() {
        let level: Level = r"
#####
#@*.#
#  $#
#####
"
        .parse()
        .unwrap();
        let solved = State::new(
            &level.map,
            level.state.player_pos(),
            vec![Pos::new(1, 2), Pos::new(1, 3)],
        )
        .unwrap();
        assert_eq!(Manhattan.estimate(&level.map, &solved), 0);
        assert_eq!(GreedyMatching.estimate(&level.map, &solved), 0);
        // the player is far from everything but there's nothing left to push
        assert_eq!(SumOfDistance.estimate(&level.map, &solved), 0);
    }

    #[test]
    fn manhattan_shares_goals() {
        // both boxes are closest to the goal on the left
        let level: Level = r"
########
#.$$  @#
#      #
#     .#
########
"
        .parse()
        .unwrap();
        assert_eq!(Manhattan.estimate(&level.map, &level.state), 1 + 2);
        // the second box has to take the other goal
        assert_eq!(GreedyMatching.estimate(&level.map, &level.state), 1 + 5);
        // player to the closer box plus the same matching
        assert_eq!(SumOfDistance.estimate(&level.map, &level.state), 3 + 1 + 5);
    }

    #[test]
    fn sum_of_distance_matches_optimally() {
        // greedy pairs the right box with the near goal and leaves the far one
        // to the left box, swapping them is cheaper
        let level: Level = r"
##########
#$ .$  .@#
#        #
##########
"
        .parse()
        .unwrap();
        assert_eq!(Manhattan.estimate(&level.map, &level.state), 2 + 1);
        assert_eq!(GreedyMatching.estimate(&level.map, &level.state), 1 + 6);
        assert_eq!(SumOfDistance.estimate(&level.map, &level.state), 4 + 2 + 3);
    }

    #[test]
    fn sum_of_distance_skips_boxes_on_goals() {
        let level: Level = r"
#######
#@*.$ #
#######
"
        .parse()
        .unwrap();
        // only the box at (1,4) counts, and only the free goal next to it
        assert_eq!(
            heuristic_for(HeuristicKind::SumOfDistance).estimate(&level.map, &level.state),
            3 + 1
        );
    }

    #[test]
    fn assignment() {
        assert_eq!(min_cost_assignment(&[]), 0);
        assert_eq!(min_cost_assignment(&[vec![7]]), 7);
        let costs = vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]];
        assert_eq!(min_cost_assignment(&costs), 5);
        let costs = vec![vec![1, 3], vec![2, 6]];
        assert_eq!(min_cost_assignment(&costs), 3 + 2);
    }

    #[test]
    fn matching_is_never_lower() {
        let level: Level = r"
######
#.@$ #
# $. #
#  $ #
# . ##
######
"
        .parse()
        .unwrap();
        for (_, next) in level.state.successors(&level.map, false) {
            let simple = Manhattan.estimate(&level.map, &next);
            let matching = GreedyMatching.estimate(&level.map, &next);
            assert!(simple <= matching);
        }
        assert_eq!(heuristic_for(HeuristicKind::Manhattan).estimate(&level.map, &level.state), 3);
    }
}
