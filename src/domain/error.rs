use std::io;

use thiserror::Error;

/// Library-wide error type for skulens operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is required but not set")]
    EnvironmentVariableMissing(String),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operator input (SQL query or prompt template) is missing or blank.
    #[error("{what} is required. SQL and prompt template must both be provided")]
    MissingInput { what: &'static str },

    /// A fetched row does not match any supported column layout.
    #[error(
        "Row {index} has {actual} column(s); expected 4 (product_id, sku, type, image_url) \
         or 5 (product_id, sku, type, image_url, handle)"
    )]
    RowArity { index: usize, actual: usize },

    /// A required column of a fetched row is NULL.
    #[error("Row {index}: column '{column}' must not be NULL")]
    NullColumn { index: usize, column: &'static str },

    /// Database connection or query failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Model API request failed.
    #[error("Model API error{}: {message}", status_suffix(.status))]
    ModelApiError { message: String, status: Option<u16> },

    /// Report rendering failed.
    #[error("Failed to render report: {0}")]
    ReportRender(String),

    /// Interactive input was aborted or failed.
    #[error("Interactive input failed: {0}")]
    Interaction(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True when the failure was raised before any external system was contacted.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::MissingInput { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {})", code)).unwrap_or_default()
}
