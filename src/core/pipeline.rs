use crate::adapters::http::LeetCodeClient;
use crate::core::export::to_csv;
use crate::core::ranking::filter_and_rank;
use crate::core::{ConfigProvider, FetchOutcome, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

pub struct LeetCodePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: LeetCodeClient,
}

impl<S: Storage, C: ConfigProvider> LeetCodePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = LeetCodeClient::new(
            config.listing_endpoint(),
            config.graphql_endpoint(),
            config.request_timeout(),
        )?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeetCodePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<FetchOutcome>> {
        tracing::info!(
            "🚀 Listing problems from: {}",
            self.config.listing_endpoint()
        );
        let problems = self.client.list_problems().await?;
        tracing::info!("📋 Found {} problems", problems.len());

        let outcomes = self
            .client
            .fetch_all(problems, self.config.concurrent_requests())
            .await?;

        Ok(outcomes)
    }

    async fn transform(&self, data: Vec<FetchOutcome>) -> Result<TransformResult> {
        let criteria = self.config.filter_criteria();
        tracing::debug!("Filter criteria: {:?}", criteria);

        let ranking = filter_and_rank(data, &criteria);
        for failed in &ranking.failed {
            tracing::debug!("Skipping {}: {}", failed.slug, failed.reason);
        }

        let csv_output = to_csv(&ranking.ranked)?;

        Ok(TransformResult {
            ranked: ranking.ranked,
            failed: ranking.failed,
            excluded: ranking.excluded,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        );

        tracing::debug!(
            "Writing CSV ({} bytes) to storage",
            result.csv_output.len()
        );
        self.storage
            .write_file(self.config.output_file(), &result.csv_output)
            .await?;

        Ok(output_path)
    }
}
