//! Multimodal model port definition.

use crate::domain::{AppError, PromptRequest};

/// Port for multimodal model calls.
pub trait ModelClient {
    /// Send one prompt with its images and return the model's text output.
    ///
    /// The output is expected, not guaranteed, to be JSON.
    fn analyze(&self, request: &PromptRequest) -> Result<String, AppError>;
}

/// Builds a model client when the first model call is about to happen.
///
/// Prompt previews and empty result sets never need a client, and therefore
/// never need a credential.
pub trait ModelClientFactory {
    fn create(&self) -> Result<Box<dyn ModelClient>, AppError>;
}
