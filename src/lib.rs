// Library exports for gist-bench
// This allows tests and benches to use the modules

pub mod bench;
pub mod config;
pub mod db;
pub mod error;
pub mod plan;
pub mod stats;

// Re-export commonly used types
pub use bench::{AggregateReport, BenchmarkOrchestrator, TrialResult, TrialRunner};
pub use config::{ConnectionTarget, RunSettings};
pub use error::{BenchError, Result};
