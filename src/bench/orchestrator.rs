//! Drives one benchmark run per configured target, in order, fail-fast.

use tracing::{error, info};

use crate::config::{ConnectionTarget, RunSettings};
use crate::db::{Backend, PgBackend};
use crate::error::Result;

use super::events::RunObserver;
use super::runner::TrialRunner;
use super::{AggregateReport, TracingObserver};

pub struct BenchmarkOrchestrator {
    settings: RunSettings,
    import_sql: String,
}

impl BenchmarkOrchestrator {
    pub fn new(settings: RunSettings, import_sql: String) -> Self {
        Self {
            settings,
            import_sql,
        }
    }

    /// Run every target in config order. The first failing target aborts
    /// the whole batch; a partial batch is not meaningful evidence.
    pub async fn run_all(&self, targets: &[ConnectionTarget]) -> Result<()> {
        let observer = TracingObserver;

        for target in targets {
            info!("Benchmarking target {}", target.addr());

            let backend = PgBackend::new(target);
            let report = match self.run_target(&backend, &observer).await {
                Ok(report) => report,
                Err(e) => {
                    error!("Target {} failed: {}", target.addr(), e);
                    return Err(e);
                }
            };

            println!("{}", report);
            println!();
        }

        Ok(())
    }

    /// One target: full trial lifecycle, then the two duration series are
    /// aggregated independently.
    pub async fn run_target<B: Backend>(
        &self,
        backend: &B,
        observer: &dyn RunObserver,
    ) -> Result<AggregateReport> {
        let runner = TrialRunner::new(backend, &self.settings, &self.import_sql, observer);
        let outcome = runner.run().await?;
        AggregateReport::from_outcome(&outcome)
    }
}
