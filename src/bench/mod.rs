//! Benchmark trial engine: per-target lifecycle, timing, aggregation.

pub mod events;
pub mod orchestrator;
pub mod runner;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats;

pub use events::{Phase, RunObserver, TracingObserver};
pub use orchestrator::BenchmarkOrchestrator;
pub use runner::{RunOutcome, TrialRunner};

/// Durations recorded by one trial. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Wall-clock time of the CREATE INDEX statement.
    pub index_build_ms: f64,
    /// Server-reported execution time of the spatial-join query.
    pub query_ms: f64,
}

/// Per-target summary, the terminal artifact of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub mean_index_ms: f64,
    pub median_index_ms: f64,
    pub mean_query_ms: f64,
    pub median_query_ms: f64,
    pub index_size_bytes: i64,
}

impl AggregateReport {
    /// Fold a run's trials into the two independent duration summaries.
    pub fn from_outcome(outcome: &RunOutcome) -> Result<Self> {
        let index_ms: Vec<f64> = outcome.trials.iter().map(|t| t.index_build_ms).collect();
        let query_ms: Vec<f64> = outcome.trials.iter().map(|t| t.query_ms).collect();

        let index_summary = stats::summarize(&index_ms)?;
        let query_summary = stats::summarize(&query_ms)?;

        Ok(Self {
            mean_index_ms: index_summary.mean,
            median_index_ms: index_summary.median,
            mean_query_ms: query_summary.mean,
            median_query_ms: query_summary.median,
            index_size_bytes: outcome.index_size_bytes,
        })
    }
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CREATE INDEX time, avg: {} ms, median: {} ms",
            self.mean_index_ms, self.median_index_ms
        )?;
        writeln!(
            f,
            "SELECT execution time, avg: {} ms, median: {} ms",
            self.mean_query_ms, self.median_query_ms
        )?;
        write!(f, "Index size: {}", self.index_size_bytes)
    }
}
