//! HTML report rendered with Minijinja and viewed in a browser.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{
    Analysis, AppError, INVALID_JSON_MESSAGE, ProductOutcome, ReportConfig, RunSummary,
};
use crate::ports::Presenter;

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// Collects product sections and writes them as one HTML page when the run ends.
pub struct HtmlReport {
    path: PathBuf,
    open_in_browser: bool,
    model: String,
    sections: Vec<ReportSection>,
}

/// One product as the template sees it.
#[derive(Debug, Clone, Serialize)]
struct ReportSection {
    product_id: String,
    sku: String,
    handle: Option<String>,
    images: Vec<String>,
    prompt: String,
    status: &'static str,
    raw: Option<String>,
    parsed_json: Option<String>,
}

impl From<&ProductOutcome> for ReportSection {
    fn from(outcome: &ProductOutcome) -> Self {
        let status = match &outcome.analysis {
            Analysis::Skipped => "skipped",
            Analysis::Parsed { .. } => "parsed",
            Analysis::Unparsed { .. } => "unparsed",
        };

        Self {
            product_id: outcome.product.product_id.to_string(),
            sku: outcome.product.sku.clone(),
            handle: outcome.product.handle.clone(),
            images: outcome.product.images.clone(),
            prompt: outcome.prompt.clone(),
            status,
            raw: outcome.analysis.raw().map(str::to_string),
            parsed_json: outcome.pretty_json(),
        }
    }
}

impl HtmlReport {
    pub fn new(config: &ReportConfig, model: impl Into<String>) -> Self {
        Self {
            path: config.path.clone(),
            open_in_browser: config.open_in_browser,
            model: model.into(),
            sections: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(
        &self,
        summary: Option<&RunSummary>,
        error: Option<&AppError>,
    ) -> Result<(), AppError> {
        let html = render_report(
            &self.sections,
            &self.model,
            summary,
            error.map(ToString::to_string).as_deref(),
        )?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, html)?;
        tracing::info!(path = %self.path.display(), "wrote HTML report");

        if self.open_in_browser {
            self.open();
        }
        Ok(())
    }

    fn open(&self) {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        // A missing browser must not turn a finished run into a failure.
        if let Err(err) = webbrowser::open(&target.to_string_lossy()) {
            tracing::warn!(error = %err, path = %target.display(), "could not open browser");
        }
    }
}

impl Presenter for HtmlReport {
    fn product_finished(&mut self, outcome: &ProductOutcome) -> Result<(), AppError> {
        self.sections.push(ReportSection::from(outcome));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<(), AppError> {
        self.write(Some(summary), None)
    }

    fn failed(&mut self, error: &AppError) -> Result<(), AppError> {
        self.write(None, Some(error))
    }
}

fn render_report(
    sections: &[ReportSection],
    model: &str,
    summary: Option<&RunSummary>,
    error: Option<&str>,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE).map_err(report_error)?;

    let template = env.get_template(REPORT_TEMPLATE_NAME).map_err(report_error)?;
    template
        .render(context! {
            generated_at => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            model => model,
            summary => summary,
            sections => sections,
            error => error,
            invalid_json_message => INVALID_JSON_MESSAGE,
        })
        .map_err(report_error)
}

fn report_error(err: minijinja::Error) -> AppError {
    AppError::ReportRender(err.to_string())
}
