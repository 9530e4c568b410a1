//! Application configuration models.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "SKULENS_MODEL";
pub const ENV_API_URL: &str = "SKULENS_API_URL";

/// Configuration built once at start-up and handed to the adapters.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub model: ModelApiConfig,
    pub report: ReportConfig,
    /// Model API credential. Absent is allowed until a model call is needed.
    pub api_key: Option<ApiKey>,
}

/// Optional `skulens.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub model: ModelApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.model.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

/// Relational database endpoint. Read from the environment only.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DatabaseConfig {
    /// Read `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::EnvironmentVariableMissing(key.to_string()))
        };

        let host = required(ENV_DB_HOST)?;
        let raw_port = required(ENV_DB_PORT)?;
        let port = raw_port.trim().parse::<u16>().map_err(|err| AppError::ParseError {
            what: ENV_DB_PORT.to_string(),
            details: format!("'{}' is not a valid port: {}", raw_port, err),
        })?;

        Ok(Self {
            host,
            port,
            name: required(ENV_DB_NAME)?,
            user: required(ENV_DB_USER)?,
            // An empty password is a legitimate local setup.
            password: lookup(ENV_DB_PASSWORD)
                .ok_or_else(|| AppError::EnvironmentVariableMissing(ENV_DB_PASSWORD.into()))?,
        })
    }
}

/// Bearer credential for the model API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Model API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelApiConfig {
    /// Responses API endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default)]
    pub temperature: f32,
    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: 0.0,
            timeout_secs: None,
        }
    }
}

impl ModelApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "temperature must be between 0 and 2".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/responses").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

/// HTML report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Where the HTML report is written.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
    /// Open the report in the default browser after the run.
    #[serde(default)]
    pub open_in_browser: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { path: default_report_path(), open_in_browser: false }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("report path must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("skulens-report.html")
}
