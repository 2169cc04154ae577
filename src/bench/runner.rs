//! Runs the full benchmark lifecycle for one connection target.

use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use crate::config::RunSettings;
use crate::db::{self, Backend, Session};
use crate::error::Result;
use crate::plan;

use super::events::{Phase, RunObserver};
use super::TrialResult;

/// Everything a run produces before aggregation.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub trials: Vec<TrialResult>,
    pub index_size_bytes: i64,
}

/// Executes prepare → N timed trials → size probe → cleanup against one
/// target. Any failing step aborts the run immediately; partially
/// collected trials are discarded and the working table is left in place
/// for postmortem inspection.
pub struct TrialRunner<'a, B: Backend> {
    backend: &'a B,
    settings: &'a RunSettings,
    import_sql: &'a str,
    observer: &'a dyn RunObserver,
}

impl<'a, B: Backend> TrialRunner<'a, B> {
    pub fn new(
        backend: &'a B,
        settings: &'a RunSettings,
        import_sql: &'a str,
        observer: &'a dyn RunObserver,
    ) -> Self {
        Self {
            backend,
            settings,
            import_sql,
            observer,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let run_id = Uuid::new_v4();
        let table = &self.settings.table;
        let column = &self.settings.geometry_column;
        let index = self.settings.index_name();

        // Import phase. The session is closed afterwards so no session
        // state left by the script leaks into the timed phase.
        let mut session = self.backend.connect().await?;

        self.observer.phase_started(run_id, Phase::DropTable);
        session.execute(&db::drop_table(table)).await?;

        self.observer.phase_started(run_id, Phase::Import);
        let import_started = Instant::now();
        session.execute(self.import_sql).await?;
        self.observer
            .phase_finished(run_id, Phase::Import, import_started.elapsed());

        session.close().await?;

        // Timed phase on a fresh session.
        let mut session = self.backend.connect().await?;
        info!(
            "Run {}: starting {} trials on table {}",
            run_id, self.settings.trials, table
        );

        let mut trials = Vec::with_capacity(self.settings.trials);
        for trial in 1..=self.settings.trials {
            self.observer.phase_started(run_id, Phase::DropIndex);
            session.execute(&db::drop_index(&index)).await?;

            // Wall clock around the build statement only; the drop above
            // guarantees this is never an incremental rebuild.
            self.observer.phase_started(run_id, Phase::CreateIndex);
            let build_started = Instant::now();
            session
                .execute(&db::create_gist_index(&index, table, column))
                .await?;
            let build_elapsed = build_started.elapsed();
            self.observer
                .phase_finished(run_id, Phase::CreateIndex, build_elapsed);

            // Query time comes from the server's own plan output, so it
            // excludes network and serialization overhead.
            self.observer.phase_started(run_id, Phase::SpatialJoin);
            let plan_lines = session
                .query_plan(&db::explain_spatial_join(table, column))
                .await?;
            let query_ms = plan::execution_time_ms(&plan_lines)?;

            let result = TrialResult {
                index_build_ms: build_elapsed.as_secs_f64() * 1000.0,
                query_ms,
            };
            self.observer.trial_recorded(run_id, trial, &result);
            trials.push(result);
        }

        // Size is structurally determined by the final build, so one
        // probe after the loop is enough.
        self.observer.phase_started(run_id, Phase::IndexSize);
        let index_size_bytes = session.relation_size(&index).await?;

        self.observer.phase_started(run_id, Phase::Cleanup);
        session.execute(&db::drop_table(table)).await?;
        session.close().await?;

        Ok(RunOutcome {
            trials,
            index_size_bytes,
        })
    }
}
