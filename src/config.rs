use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde_derive::Deserialize;

use crate::solver::{Limits, SearchOptions};

#[derive(Debug)]
pub enum ConfigErr {
    Io(io::Error),
    Json(serde_json::Error),
    UnsupportedAlgorithm(String),
    UnsupportedHeuristic(String),
    InvalidTimeLimit(f64),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Io(err) => write!(f, "Can't read config: {}", err),
            ConfigErr::Json(err) => write!(f, "Invalid config: {}", err),
            ConfigErr::UnsupportedAlgorithm(name) => write!(f, "Unsupported algorithm: {}", name),
            ConfigErr::UnsupportedHeuristic(name) => write!(f, "Unsupported heuristic: {}", name),
            ConfigErr::InvalidTimeLimit(secs) => write!(f, "Invalid time limit: {}", secs),
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Io(err) => Some(err),
            ConfigErr::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigErr {
    fn from(err: io::Error) -> Self {
        ConfigErr::Io(err)
    }
}

impl From<serde_json::Error> for ConfigErr {
    fn from(err: serde_json::Error) -> Self {
        ConfigErr::Json(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Bfs,
    Dfs,
    Iddfs,
    AStar,
    Greedy,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Bfs => "BFS",
            Method::Dfs => "DFS",
            Method::Iddfs => "IDDFS",
            Method::AStar => "A*",
            Method::Greedy => "Greedy",
        }
    }

    pub fn needs_heuristic(self) -> bool {
        match self {
            Method::AStar | Method::Greedy => true,
            Method::Bfs | Method::Dfs | Method::Iddfs => false,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Bfs
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BFS" => Ok(Method::Bfs),
            "DFS" => Ok(Method::Dfs),
            "IDDFS" => Ok(Method::Iddfs),
            "A*" | "ASTAR" | "A_STAR" => Ok(Method::AStar),
            "GREEDY" | "LOCAL_GREEDY" => Ok(Method::Greedy),
            _ => Err(ConfigErr::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Manhattan,
    GreedyMatching,
    SumOfDistance,
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::Manhattan => write!(f, "MANHATTAN"),
            HeuristicKind::GreedyMatching => write!(f, "GREEDY_MATCHING"),
            HeuristicKind::SumOfDistance => write!(f, "SUM_OF_DISTANCE"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MANHATTAN" => Ok(HeuristicKind::Manhattan),
            "GREEDY_MATCHING" | "PERFECT_MATCH" => Ok(HeuristicKind::GreedyMatching),
            "SUM_OF_DISTANCE" | "SUM_OF_DISTANCES" => Ok(HeuristicKind::SumOfDistance),
            _ => Err(ConfigErr::UnsupportedHeuristic(s.to_owned())),
        }
    }
}

/// The config file as written by users, validated by `Config::from_json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    map_name: Option<String>,
    algorithm: Option<String>,
    heuristic: Option<String>,
    pruning: bool,
    node_limit: Option<u64>,
    time_limit_seconds: Option<f64>,
    output_file: Option<String>,
    generate_animation: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub map_name: Option<String>,
    pub method: Method,
    pub heuristic: Option<HeuristicKind>,
    pub pruning: bool,
    pub node_limit: Option<u64>,
    pub time_limit: Option<Duration>,
    pub output_file: Option<String>,
    pub generate_animation: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigErr> {
        let json = fs::read_to_string(path)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Config, ConfigErr> {
        let file: ConfigFile = serde_json::from_str(json)?;

        let method = match file.algorithm {
            Some(ref name) => name.parse()?,
            None => Method::default(),
        };
        let heuristic = match file.heuristic {
            Some(ref name) => Some(name.parse()?),
            None => None,
        };
        let time_limit = match file.time_limit_seconds {
            Some(secs) => Some(parse_time_limit(secs)?),
            None => None,
        };

        Ok(Config {
            map_name: file.map_name,
            method,
            heuristic,
            pruning: file.pruning,
            node_limit: file.node_limit,
            time_limit,
            output_file: file.output_file,
            generate_animation: file.generate_animation,
        })
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            pruning: self.pruning,
            limits: Limits {
                nodes: self.node_limit,
                time: self.time_limit,
            },
        }
    }
}

pub fn parse_time_limit(secs: f64) -> Result<Duration, ConfigErr> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigErr::InvalidTimeLimit(secs));
    }
    Ok(Duration::from_secs_f64(secs))
}
