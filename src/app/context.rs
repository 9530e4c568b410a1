use crate::ports::{ModelClientFactory, RowSource};

/// Application context holding the collaborators of a run.
pub struct AppContext<R: RowSource, F: ModelClientFactory> {
    rows: R,
    models: F,
}

impl<R: RowSource, F: ModelClientFactory> AppContext<R, F> {
    /// Create a new application context.
    pub fn new(rows: R, models: F) -> Self {
        Self { rows, models }
    }

    /// Get a reference to the row source.
    pub fn rows(&self) -> &R {
        &self.rows
    }

    /// Get a reference to the model client factory.
    pub fn models(&self) -> &F {
        &self.models
    }
}
