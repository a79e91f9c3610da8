use crate::domain::model::{FetchOutcome, FilterCriteria, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn listing_endpoint(&self) -> &str;
    fn graphql_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Duration;
    fn filter_criteria(&self) -> FilterCriteria;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FetchOutcome>>;
    async fn transform(&self, data: Vec<FetchOutcome>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
