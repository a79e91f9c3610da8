use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting ETL process...");
        self.monitor.log_stats("Start");

        // Extract
        let outcomes = self.pipeline.extract().await?;
        tracing::info!("📥 Fetched {} problem details", outcomes.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(outcomes).await?;
        tracing::info!(
            "🔧 Ranked {} problems ({} filtered out, {} failed to fetch)",
            result.ranked.len(),
            result.excluded,
            result.failed.len()
        );
        if !result.failed.is_empty() {
            tracing::warn!(
                "⚠️ {} problems could not be fetched and are missing from the export",
                result.failed.len()
            );
        }
        self.monitor.log_stats("Transform");

        let summary_counts = (result.ranked.len(), result.failed.len(), result.excluded);

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        let (exported, failed, excluded) = summary_counts;
        Ok(RunSummary {
            output_path,
            exported,
            failed,
            excluded,
        })
    }
}
