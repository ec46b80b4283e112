//! Files describing a successful search - metrics as JSON and the path as CSV for replaying.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use serde_derive::Serialize;

use crate::data::Pos;
use crate::fs;
use crate::solver::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErr {
    Unsolved,
}

impl Display for ReportErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReportErr::Unsolved => write!(f, "Only successful searches can be exported"),
        }
    }
}

impl Error for ReportErr {}

#[derive(Debug, Serialize)]
struct Metrics {
    algorithm: String,
    success: bool,
    cost: u32,
    path_length: usize,
    metrics: SearchMetrics,
}

#[derive(Debug, Serialize)]
struct SearchMetrics {
    nodes_expanded: u64,
    max_frontier_size: usize,
    processing_time_seconds: f64,
}

pub fn metrics_json(result: &SearchResult) -> Result<String, serde_json::Error> {
    let stats = result.stats();
    let secs = stats.elapsed().as_secs_f64();
    let metrics = Metrics {
        algorithm: result.method().to_string(),
        success: result.is_success(),
        cost: result.cost(),
        path_length: result.path_len(),
        metrics: SearchMetrics {
            nodes_expanded: stats.nodes_expanded(),
            max_frontier_size: stats.max_frontier(),
            processing_time_seconds: (secs * 10_000.0).round() / 10_000.0,
        },
    };
    serde_json::to_string_pretty(&metrics)
}

pub fn animation_csv(result: &SearchResult) -> AnimationCsv<'_> {
    AnimationCsv { result }
}

/// One row per state on the path, the action is the move which led to it.
#[derive(Debug, Clone, Copy)]
pub struct AnimationCsv<'a> {
    result: &'a SearchResult,
}

impl<'a> Display for AnimationCsv<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "step,player_pos,boxes_pos,action")?;
        for (i, state) in self.result.path().iter().enumerate() {
            let action = match i {
                0 => "START".to_string(),
                _ => self
                    .result
                    .moves()
                    .get(i - 1)
                    .map(|mov| mov.to_string())
                    .unwrap_or_default(),
            };
            write!(f, "{},{},", i, quoted(&state.player_pos().to_string()))?;
            write!(f, "{},", quoted(&positions(state.boxes())))?;
            writeln!(f, "{}", action)?;
        }
        Ok(())
    }
}

fn positions(boxes: &[Pos]) -> String {
    boxes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Positions contain commas so they need quotes, empty fields stay empty.
fn quoted(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}

pub fn metrics_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("metrics_{}.json", name))
}

pub fn animation_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("animation_{}.csv", name))
}

/// Writes the metrics and optionally the animation, returns the written paths.
pub fn write_results(
    result: &SearchResult,
    dir: &Path,
    name: &str,
    animation: bool,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !result.is_success() {
        return Err(Box::new(ReportErr::Unsolved));
    }

    let mut written = Vec::new();

    let path = metrics_path(dir, name);
    fs::write_file(&path, &metrics_json(result)?)?;
    written.push(path);

    if animation {
        let path = animation_path(dir, name);
        fs::write_file(&path, &animation_csv(result).to_string())?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::config::{Config, Method};
    use crate::level::Level;
    use crate::solver::{Stats, TerminalReason};
    use crate::Solve;

    use super::*;

    fn solved() -> SearchResult {
        let level: Level = r"
#####
# @ #
# $ #
# . #
#####
"
        .parse()
        .unwrap();
        level.solve(&Config::default()).unwrap()
    }

    #[test]
    fn metrics() {
        let result = solved();
        let json = metrics_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "BFS");
        assert_eq!(value["success"], true);
        assert_eq!(value["cost"], 1);
        assert_eq!(value["path_length"], 2);
        assert_eq!(value["metrics"]["nodes_expanded"], 2);
        assert!(value["metrics"]["max_frontier_size"].as_u64().unwrap() >= 1);
        assert!(value["metrics"]["processing_time_seconds"].is_f64());
    }

    #[test]
    fn animation() {
        let result = solved();
        let expected = r#"step,player_pos,boxes_pos,action
0,"(1,2)","(2,2)",START
1,"(2,2)","(3,2)",D
"#;
        assert_eq!(animation_csv(&result).to_string(), expected);
    }

    #[test]
    fn animation_without_boxes() {
        let level: Level = "#@#".parse().unwrap();
        let result = level.solve(&Config::default()).unwrap();
        assert_eq!(
            animation_csv(&result).to_string(),
            "step,player_pos,boxes_pos,action\n0,\"(0,1)\",,START\n"
        );
    }

    #[test]
    fn writing() {
        let dir = env::temp_dir().join(format!("sokoban-search-report-{}", std::process::id()));
        let result = solved();

        let written = write_results(&result, &dir, "test", false).unwrap();
        assert_eq!(written, vec![metrics_path(&dir, "test")]);
        assert!(written[0].ends_with("metrics_test.json"));

        let written = write_results(&result, &dir, "test", true).unwrap();
        assert_eq!(written.len(), 2);
        let csv = fs::read_file(animation_path(&dir, "test")).unwrap();
        assert_eq!(csv, animation_csv(&result).to_string());

        let failed = SearchResult::failure(Method::Bfs, Stats::new(), TerminalReason::Exhausted);
        assert!(write_results(&failed, &dir, "failed", true).is_err());
        assert!(!metrics_path(&dir, "failed").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
