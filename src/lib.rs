// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod deadlock;
pub mod heuristic;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod report;
pub mod solver;
pub mod state;

pub mod data;
mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::Config;
use crate::level::Level;
use crate::solver::{SearchResult, SolverErr};

pub use crate::parser::ParserErr;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config) -> Result<SearchResult, SolverErr>;
}
