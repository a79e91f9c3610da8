pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::LeetCodeClient, storage::LocalStorage};
pub use core::{etl::EtlEngine, pipeline::LeetCodePipeline};
pub use domain::model::{Difficulty, FilterCriteria, ProblemDetail, RunSummary};
pub use utils::error::{EtlError, Result};
