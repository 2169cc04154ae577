use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};

/// One database target from the config document. Each target gets its own
/// fully isolated benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    pub dbname: String,
}

fn default_port() -> u16 {
    5432
}

impl ConnectionTarget {
    pub fn addr(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.dbname)
    }
}

/// Per-run knobs with their documented defaults, passed by value into the
/// orchestrator. No process-wide mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSettings {
    /// Scratch table the import script populates.
    pub table: String,
    /// Geometry column the GiST index is built on.
    pub geometry_column: String,
    /// Number of timed trials per target, never below 1.
    pub trials: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            table: "roads_rdr".to_string(),
            geometry_column: "geom".to_string(),
            trials: 10,
        }
    }
}

impl RunSettings {
    /// Index name derived from the table name, one index at a time per table.
    pub fn index_name(&self) -> String {
        format!("{}_idx", self.table)
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

/// Load the config document and pull out the connection targets.
///
/// The `connections` field is validated before typed deserialization so a
/// malformed document reports what is actually wrong with it.
pub fn load_targets(path: &Path) -> Result<Vec<ConnectionTarget>> {
    let content = fs::read_to_string(path)?;

    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| BenchError::Config(format!("invalid config document: {}", e)))?;

    let connections = document
        .get("connections")
        .ok_or_else(|| BenchError::Config("`connections' field missing from config".to_string()))?;

    if !connections.is_array() {
        return Err(BenchError::Config(
            "`connections' field is not an array".to_string(),
        ));
    }

    serde_json::from_value(connections.clone())
        .map_err(|e| BenchError::Config(format!("invalid connection entry: {}", e)))
}
