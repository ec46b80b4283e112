use std::fmt::{self, Debug, Display, Formatter};

use crate::map::GameMap;
use crate::map_formatter::MapFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub map: GameMap,
    pub state: State,
}

impl Level {
    pub(crate) fn new(map: GameMap, state: State) -> Self {
        Level { map, state }
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.xsb_with_state(&self.state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
