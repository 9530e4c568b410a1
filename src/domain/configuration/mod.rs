pub mod app_config;
pub mod loader;

pub use app_config::{ApiKey, AppConfig, DatabaseConfig, FileConfig, ModelApiConfig, ReportConfig};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_config_with, parse_config_content};
