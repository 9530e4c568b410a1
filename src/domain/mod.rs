pub mod analysis;
pub mod catalog;
pub mod configuration;
pub mod error;
pub mod prompt;

pub use analysis::{Analysis, INVALID_JSON_MESSAGE, ProductOutcome, RunSummary};
pub use catalog::{
    CatalogRow, ProductAggregate, ProductGroups, ProductId, RawRow, RowSchema, group_rows,
    validate_rows,
};
pub use configuration::{
    ApiKey, AppConfig, DatabaseConfig, FileConfig, ModelApiConfig, ReportConfig,
};
pub use error::AppError;
pub use prompt::{PromptRequest, compose_prompt};
