//! Level tuning loaded from a JSON document
//!
//! Three parallel per-level sequences: goal score, spawn interval seconds,
//! time limit seconds. A missing or malformed document is never fatal; the
//! built-in defaults keep the game playable.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GOAL, DEFAULT_SPAWN_EVERY, DEFAULT_TIME_LIMIT};

/// Resolved tuning for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    pub goal: u32,
    pub spawn_every: f32,
    pub time_limit: f32,
}

/// Per-level tuning table.
///
/// Field names match the external document (`goals`, `spawnRates`,
/// `timeLimits`), one entry per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTable {
    pub goals: Vec<u32>,
    pub spawn_rates: Vec<f32>,
    pub time_limits: Vec<f32>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            goals: vec![15, 30, 60],
            spawn_rates: vec![0.8, 0.6, 0.4],
            time_limits: vec![60.0, 40.0, 30.0],
        }
    }
}

impl LevelTable {
    /// Load a table from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(table) => {
                log::info!("Loaded level config from {}", path.display());
                table
            }
            Err(err) => {
                log::warn!(
                    "Failed to load level config from {}: {err}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let table: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        Ok(table)
    }

    /// Number of configured levels (3 with the defaults)
    pub fn max_level(&self) -> u32 {
        self.goals.len() as u32
    }

    /// Tuning for a 1-based level. Each field falls back independently when
    /// the document is shorter than the requested level.
    pub fn params_for(&self, level: u32) -> LevelParams {
        let i = level.saturating_sub(1) as usize;
        LevelParams {
            goal: self.goals.get(i).copied().unwrap_or(DEFAULT_GOAL),
            spawn_every: self.spawn_rates.get(i).copied().unwrap_or(DEFAULT_SPAWN_EVERY),
            time_limit: self.time_limits.get(i).copied().unwrap_or(DEFAULT_TIME_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_document() {
        let json = r#"{
            "goals": [10, 20],
            "spawnRates": [1.0, 0.5],
            "timeLimits": [30, 20]
        }"#;
        let table: LevelTable = serde_json::from_str(json).expect("parse");
        assert_eq!(table.max_level(), 2);
        assert_eq!(
            table.params_for(2),
            LevelParams {
                goal: 20,
                spawn_every: 0.5,
                time_limit: 20.0
            }
        );
    }

    #[test]
    fn test_default_table_matches_builtins() {
        let table = LevelTable::default();
        assert_eq!(table.max_level(), 3);
        assert_eq!(table.params_for(1).goal, 15);
        assert_eq!(table.params_for(2).spawn_every, 0.6);
        assert_eq!(table.params_for(3).time_limit, 30.0);
    }

    #[test]
    fn test_out_of_range_level_falls_back_per_field() {
        let table = LevelTable {
            goals: vec![10],
            spawn_rates: vec![],
            time_limits: vec![30.0],
        };
        let params = table.params_for(1);
        assert_eq!(params.goal, 10);
        assert_eq!(params.spawn_every, DEFAULT_SPAWN_EVERY);
        assert_eq!(params.time_limit, 30.0);

        let params = table.params_for(5);
        assert_eq!(params.goal, DEFAULT_GOAL);
        assert_eq!(params.spawn_every, DEFAULT_SPAWN_EVERY);
        assert_eq!(params.time_limit, DEFAULT_TIME_LIMIT);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let table = LevelTable::load_or_default("/nonexistent/config.json");
        assert_eq!(table, LevelTable::default());
    }
}
