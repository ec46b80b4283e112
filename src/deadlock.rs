//! Cheap checks for box configurations that can never be solved.
//!
//! All checks are sound - they never report a deadlock for a solvable state -
//! but far from complete. They only exist to prune the search.

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::map::GameMap;
use crate::state::State;

pub fn is_deadlocked(map: &GameMap, state: &State) -> bool {
    state
        .boxes()
        .iter()
        .any(|&b| is_box_deadlocked(map, state.boxes(), b))
}

/// `boxes` must be sorted and contain `box_pos`.
pub fn is_box_deadlocked(map: &GameMap, boxes: &[Pos], box_pos: Pos) -> bool {
    is_corner_deadlock(map, box_pos)
        || is_wall_deadlock(map, box_pos)
        || is_square_deadlock(map, boxes, box_pos)
}

/// Box off goal with a wall on both axes - it can't be pushed anywhere.
pub fn is_corner_deadlock(map: &GameMap, box_pos: Pos) -> bool {
    if map.is_goal(box_pos) {
        return false;
    }
    let vertical = map.is_wall(box_pos + Dir::Up) || map.is_wall(box_pos + Dir::Down);
    let horizontal = map.is_wall(box_pos + Dir::Left) || map.is_wall(box_pos + Dir::Right);
    vertical && horizontal
}

/// Box against a wall which continues along the whole lane the box can slide in.
///
/// Such a box can only ever move along the lane (pushing it away from the wall
/// needs the player to stand in the wall). If the lane has no goal, it's lost.
/// Other boxes are ignored which only makes this weaker, never wrong.
pub fn is_wall_deadlock(map: &GameMap, box_pos: Pos) -> bool {
    if map.is_goal(box_pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .filter(|&&wall_side| map.is_wall(box_pos + wall_side))
        .any(|&wall_side| !lane_has_exit(map, box_pos, wall_side))
}

fn lane_has_exit(map: &GameMap, box_pos: Pos, wall_side: Dir) -> bool {
    let along = if wall_side.is_vertical() {
        [Dir::Left, Dir::Right]
    } else {
        [Dir::Up, Dir::Down]
    };
    for &dir in &along {
        let mut pos = box_pos;
        while !map.is_wall(pos) {
            if map.is_goal(pos) || !map.is_wall(pos + wall_side) {
                return true;
            }
            pos = pos + dir;
        }
    }
    false
}

/// 2x2 block made only of boxes and walls with none of the boxes on a goal.
///
/// Each box in the block is stuck on both axes so nothing in it can ever move.
pub fn is_square_deadlock(map: &GameMap, boxes: &[Pos], box_pos: Pos) -> bool {
    let is_box = |pos: Pos| boxes.binary_search(&pos).is_ok();
    let (r, c) = (box_pos.r, box_pos.c);
    let corners = [
        Pos::new(r - 1, c - 1),
        Pos::new(r - 1, c),
        Pos::new(r, c - 1),
        Pos::new(r, c),
    ];
    corners.iter().any(|&top_left| {
        let square = [
            top_left,
            top_left + Dir::Right,
            top_left + Dir::Down,
            top_left + Dir::Down + Dir::Right,
        ];
        square.iter().all(|&pos| is_box(pos) || map.is_wall(pos))
            && !square.iter().any(|&pos| is_box(pos) && map.is_goal(pos))
    })
}
