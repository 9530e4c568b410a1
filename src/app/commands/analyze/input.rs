//! Operator input for an analysis run.

use crate::domain::AppError;

/// What the operator supplied for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// SQL executed verbatim against the catalog database.
    pub sql: String,
    /// Prompt template; each product's label is appended to it.
    pub template: String,
    /// Compose prompts without calling the model.
    pub prompt_preview: bool,
}

impl AnalyzeOptions {
    pub fn new(sql: impl Into<String>, template: impl Into<String>) -> Self {
        Self { sql: sql.into(), template: template.into(), prompt_preview: false }
    }

    /// Reject blank input before anything external is touched.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sql.trim().is_empty() {
            return Err(AppError::MissingInput { what: "SQL query" });
        }
        if self.template.trim().is_empty() {
            return Err(AppError::MissingInput { what: "Prompt template" });
        }
        Ok(())
    }
}
