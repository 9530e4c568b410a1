//! API facade for the application.
//!
//! Glues configuration loading, adapter construction and the analysis run.

use std::path::PathBuf;

use crate::adapters::{HtmlReport, HttpModelClientFactory, MySqlRowSource, TerminalPresenter};
use crate::app::{AppContext, commands::analyze};
use crate::domain::configuration::load_config;
use crate::ports::{ModelClientFactory, Presenter, RowSource};

pub use crate::app::commands::analyze::{AnalyzeOptions, AnalyzeResult};
pub use crate::domain::AppError;

/// Everything the operator asked for in one invocation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub sql: String,
    pub template: String,
    pub prompt_preview: bool,
    /// Explicit config file; `skulens.toml` in the working directory otherwise.
    pub config_path: Option<PathBuf>,
    /// Overrides `[report].path`.
    pub report_path: Option<PathBuf>,
    /// Opens the report in a browser when set; `[report].open_in_browser` applies otherwise.
    pub open_report: bool,
}

impl AnalysisRequest {
    fn options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            sql: self.sql.clone(),
            template: self.template.clone(),
            prompt_preview: self.prompt_preview,
        }
    }
}

/// A completed run and where its HTML report was written.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalyzeResult,
    pub report_path: PathBuf,
}

/// Run an analysis against the configured database and model API.
///
/// Results stream to stdout and are collected into the HTML report.
pub fn run_analysis(request: &AnalysisRequest) -> Result<AnalysisReport, AppError> {
    let options = request.options();
    options.validate()?;

    let mut config = load_config(request.config_path.as_deref())?;
    if let Some(path) = &request.report_path {
        config.report.path = path.clone();
    }
    config.report.open_in_browser |= request.open_report;

    let report = HtmlReport::new(&config.report, config.model.model.clone());
    let report_path = report.path().to_path_buf();
    let ctx = AppContext::new(
        MySqlRowSource::new(config.database),
        HttpModelClientFactory::new(config.model, config.api_key),
    );

    let mut presenter = (TerminalPresenter::stdout(), report);
    let result = analyze::execute(&ctx, &options, &mut presenter)?;
    Ok(AnalysisReport { result, report_path })
}

/// Run an analysis over caller-supplied collaborators.
pub fn run_analysis_with<R, F, P>(
    rows: R,
    models: F,
    options: &AnalyzeOptions,
    presenter: &mut P,
) -> Result<AnalyzeResult, AppError>
where
    R: RowSource,
    F: ModelClientFactory,
    P: Presenter + ?Sized,
{
    let ctx = AppContext::new(rows, models);
    analyze::execute(&ctx, options, presenter)
}
