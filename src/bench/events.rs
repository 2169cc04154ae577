//! Structured phase events emitted by the trial runner.
//!
//! Timing logic stays in the runner; anything that wants to narrate the
//! run (logging, test capture) observes these events instead.

use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use super::TrialResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DropTable,
    Import,
    DropIndex,
    CreateIndex,
    SpatialJoin,
    IndexSize,
    Cleanup,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::DropTable => "drop table",
            Phase::Import => "import",
            Phase::DropIndex => "drop index",
            Phase::CreateIndex => "create index",
            Phase::SpatialJoin => "spatial join",
            Phase::IndexSize => "index size",
            Phase::Cleanup => "cleanup",
        }
    }
}

pub trait RunObserver: Send + Sync {
    fn phase_started(&self, run_id: Uuid, phase: Phase);
    fn phase_finished(&self, run_id: Uuid, phase: Phase, elapsed: Duration);
    fn trial_recorded(&self, run_id: Uuid, trial: usize, result: &TrialResult);
}

/// Default observer: forwards events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn phase_started(&self, run_id: Uuid, phase: Phase) {
        debug!("Run {}: {} started", run_id, phase.name());
    }

    fn phase_finished(&self, run_id: Uuid, phase: Phase, elapsed: Duration) {
        debug!(
            "Run {}: {} finished in {:.3} ms",
            run_id,
            phase.name(),
            elapsed.as_secs_f64() * 1000.0
        );
    }

    fn trial_recorded(&self, run_id: Uuid, trial: usize, result: &TrialResult) {
        info!(
            "Run {}: trial {} - index build {:.3} ms, query {:.3} ms",
            run_id, trial, result.index_build_ms, result.query_ms
        );
    }
}
