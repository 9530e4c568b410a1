//! skulens: group catalog rows by product and classify each product's images
//! with a multimodal model.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AnalysisReport, AnalysisRequest, AnalyzeOptions, AnalyzeResult, run_analysis,
    run_analysis_with,
};
pub use domain::{
    Analysis, AppError, ProductAggregate, ProductId, ProductOutcome, PromptRequest, RawRow,
    RunSummary,
};
pub use ports::{ModelClient, ModelClientFactory, Presenter, RowSource};
