use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiError(e) if e.is_timeout() => {
                "The LeetCode API did not answer in time".to_string()
            }
            EtlError::ApiError(e) => match e.status() {
                Some(status) => format!("The LeetCode API answered with HTTP {}", status),
                None => "Could not reach the LeetCode API".to_string(),
            },
            EtlError::CsvError(_) => "Failed to build the CSV export".to_string(),
            EtlError::IoError(e) => format!("Failed to write the output file: {}", e),
            EtlError::SerializationError(_) => {
                "The problem listing was not in the expected format".to_string()
            }
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
            EtlError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection or lower --concurrent-requests and try again"
            }
            ErrorCategory::Data => "The platform response format may have changed; run with --verbose for details",
            ErrorCategory::Storage => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Run with --help to see the accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
