//! Configuration loading from `.env`, the process environment and `skulens.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use super::app_config::{
    ApiKey, AppConfig, DatabaseConfig, ENV_API_KEY, ENV_API_URL, ENV_MODEL, FileConfig,
};
use crate::domain::AppError;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "skulens.toml";

/// Load configuration from the real process environment.
///
/// `.env` in the working directory (if any) is applied first; variables
/// already set in the environment take precedence over it.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    load_config_with(config_path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit variable lookup.
pub fn load_config_with<F>(config_path: Option<&Path>, lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut file = match resolve_config_path(config_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config file");
            parse_config_content(&fs::read_to_string(&path)?)?
        }
        None => FileConfig::default(),
    };

    apply_env_overrides(&mut file, &lookup)?;
    file.validate()?;

    let database = DatabaseConfig::from_lookup(&lookup)?;
    let api_key =
        lookup(ENV_API_KEY).filter(|value| !value.trim().is_empty()).map(ApiKey::new);

    Ok(AppConfig { database, model: file.model, report: file.report, api_key })
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<FileConfig, AppError> {
    let config: FileConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => {
            Err(AppError::config_error(format!("Config file not found: {}", path.display())))
        }
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(default.is_file().then_some(default))
        }
    }
}

fn apply_env_overrides<F>(file: &mut FileConfig, lookup: &F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(model) = lookup(ENV_MODEL).filter(|value| !value.trim().is_empty()) {
        file.model.model = model;
    }
    if let Some(raw) = lookup(ENV_API_URL).filter(|value| !value.trim().is_empty()) {
        file.model.api_url = Url::parse(raw.trim()).map_err(|err| AppError::ParseError {
            what: ENV_API_URL.to_string(),
            details: err.to_string(),
        })?;
    }
    Ok(())
}
