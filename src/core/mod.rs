pub mod etl;
pub mod export;
pub mod pipeline;
pub mod ranking;

pub use crate::domain::model::{FetchOutcome, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
