use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::slice;

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::deadlock;
use crate::map::GameMap;
use crate::moves::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErr {
    BoxOnWall(Pos),
    DuplicateBox(Pos),
    PlayerOnWall(Pos),
    PlayerOnBox(Pos),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::BoxOnWall(pos) => write!(f, "Box on wall or outside the map at {}", pos),
            StateErr::DuplicateBox(pos) => write!(f, "Multiple boxes at {}", pos),
            StateErr::PlayerOnWall(pos) => {
                write!(f, "Player on wall or outside the map at {}", pos)
            }
            StateErr::PlayerOnBox(pos) => write!(f, "Player on box at {}", pos),
        }
    }
}

impl Error for StateErr {}

/// The dynamic part of a level.
///
/// Boxes are kept sorted so that two states which differ only
/// in the order boxes were inserted compare (and hash) equal.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    player_pos: Pos,
    boxes: Vec<Pos>,
}

impl State {
    pub fn new(map: &GameMap, player_pos: Pos, boxes: Vec<Pos>) -> Result<State, StateErr> {
        let state = State::new_unchecked(player_pos, boxes);

        for (i, &b) in state.boxes.iter().enumerate() {
            if map.is_wall(b) {
                return Err(StateErr::BoxOnWall(b));
            }
            // sorted so duplicates are next to each other
            if i > 0 && state.boxes[i - 1] == b {
                return Err(StateErr::DuplicateBox(b));
            }
        }
        if map.is_wall(player_pos) {
            return Err(StateErr::PlayerOnWall(player_pos));
        }
        if state.has_box(player_pos) {
            return Err(StateErr::PlayerOnBox(player_pos));
        }

        Ok(state)
    }

    pub(crate) fn new_unchecked(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    pub fn is_goal(&self, map: &GameMap) -> bool {
        // all boxes on a goal, not all goals covered - that's the same thing
        // as long as the numbers match and it makes partial states usable in tests
        self.boxes.iter().all(|&b| map.is_goal(b))
    }

    /// Lazily generates all states reachable by a single move.
    ///
    /// With `pruning`, pushes which leave the pushed box deadlocked are skipped
    /// and counted, see `Successors::pruned`.
    pub fn successors<'a>(&'a self, map: &'a GameMap, pruning: bool) -> Successors<'a> {
        Successors {
            state: self,
            map,
            pruning,
            pruned: 0,
            dirs: DIRECTIONS.iter(),
        }
    }

    fn is_free(&self, map: &GameMap, pos: Pos) -> bool {
        !map.is_wall(pos) && !self.has_box(pos)
    }

    fn try_move(&self, map: &GameMap, dir: Dir) -> Option<(Move, State)> {
        let new_player_pos = self.player_pos + dir;
        if map.is_wall(new_player_pos) {
            return None;
        }

        match self.boxes.binary_search(&new_player_pos) {
            Err(_) => {
                let new_state = State {
                    player_pos: new_player_pos,
                    boxes: self.boxes.clone(),
                };
                Some((Move::new(dir, false), new_state))
            }
            Ok(box_index) => {
                let push_dest = new_player_pos + dir;
                if !self.is_free(map, push_dest) {
                    return None;
                }

                let mut new_boxes = self.boxes.clone();
                new_boxes[box_index] = push_dest;
                let new_state = State::new_unchecked(new_player_pos, new_boxes);
                Some((Move::new(dir, true), new_state))
            }
        }
    }
}

#[derive(Debug)]
pub struct Successors<'a> {
    state: &'a State,
    map: &'a GameMap,
    pruning: bool,
    pruned: u64,
    dirs: slice::Iter<'static, Dir>,
}

impl<'a> Successors<'a> {
    /// Number of deadlocked pushes skipped so far.
    pub fn pruned(&self) -> u64 {
        self.pruned
    }

    fn is_pruned(&self, mov: Move, new_state: &State) -> bool {
        // only the pushed box can have become stuck
        self.pruning
            && mov.is_push
            && deadlock::is_box_deadlocked(
                self.map,
                new_state.boxes(),
                new_state.player_pos() + mov.dir,
            )
    }
}

impl<'a> Iterator for Successors<'a> {
    type Item = (Move, State);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = self.dirs.next() {
            if let Some((mov, new_state)) = self.state.try_move(self.map, dir) {
                if self.is_pruned(mov, &new_state) {
                    self.pruned += 1;
                    continue;
                }
                return Some((mov, new_state));
            }
        }
        None
    }
}
