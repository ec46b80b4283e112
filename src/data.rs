use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

// i32 so neighbors of border cells can be represented and rejected as out of bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which successors are generated.
/// Changing it changes which solution DFS-like strategies find.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub(crate) fn is_vertical(self) -> bool {
        self == Dir::Up || self == Dir::Down
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_around() {
        let pos = Pos::new(3, 5);
        assert_eq!(pos + Dir::Up, Pos::new(2, 5));
        assert_eq!(pos + Dir::Down, Pos::new(4, 5));
        assert_eq!(pos + Dir::Left, Pos::new(3, 4));
        assert_eq!(pos + Dir::Right, Pos::new(3, 6));
        assert_eq!(pos + Dir::Up + Dir::Down, pos);
        assert_eq!(pos + Dir::Left + Dir::Right, pos);
    }

    #[test]
    fn distances() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(3, 4)), 7);
        assert_eq!(Pos::new(3, 4).dist(Pos::new(0, 0)), 7);
        assert_eq!(Pos::new(-1, 2).dist(Pos::new(-1, 2)), 0);
    }

    #[test]
    fn formatting() {
        assert_eq!(Pos::new(1, 12).to_string(), "(1,12)");
        let dirs: String = DIRECTIONS.iter().map(|d| d.to_string()).collect();
        assert_eq!(dirs, "udlr");
    }
}
