use crate::adapters::http::{DEFAULT_GRAPHQL_ENDPOINT, DEFAULT_LISTING_ENDPOINT};
use crate::core::ConfigProvider;
use crate::domain::model::{Difficulty, FilterCriteria};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_path, validate_positive_number, validate_range, validate_url,
    Validate,
};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_OUTPUT_FILE: &str = "leetcode.csv";

#[derive(Debug, Clone, Parser)]
#[command(name = "leetcode-etl")]
#[command(about = "Export LeetCode problems ranked by popularity to CSV")]
pub struct CliConfig {
    /// Difficulty to keep; repeat the flag to keep several
    #[arg(
        long = "difficulty",
        value_enum,
        ignore_case = true,
        default_values_t = Difficulty::ALL
    )]
    pub difficulties: Vec<Difficulty>,

    #[arg(long, help = "Drop problems that require a premium subscription")]
    pub exclude_paid: bool,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, default_value = "16")]
    pub concurrent_requests: usize,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_LISTING_ENDPOINT)]
    pub listing_endpoint: String,

    #[arg(long, default_value = DEFAULT_GRAPHQL_ENDPOINT)]
    pub graphql_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage for each phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn listing_endpoint(&self) -> &str {
        &self.listing_endpoint
    }

    fn graphql_endpoint(&self) -> &str {
        &self.graphql_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.difficulties.iter().copied()).exclude_paid_only(self.exclude_paid)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("listing_endpoint", &self.listing_endpoint)?;
        validate_url("graphql_endpoint", &self.graphql_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_name("output_file", &self.output_file)?;
        validate_range("concurrent_requests", self.concurrent_requests, 1, 100)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
