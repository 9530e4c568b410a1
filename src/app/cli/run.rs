//! Run command implementation.

use std::fs;
use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Editor, Error as DialoguerError};

use crate::app::api::{self, AnalysisRequest};
use crate::domain::AppError;

#[derive(Args)]
pub struct RunArgs {
    /// SQL query returning product_id, sku, type, image_url[, handle]
    #[arg(long, conflicts_with = "sql_file")]
    sql: Option<String>,
    /// Read the SQL query from a file
    #[arg(long, value_name = "PATH")]
    sql_file: Option<PathBuf>,
    /// Prompt template sent with every product
    #[arg(short, long, conflicts_with = "prompt_file")]
    prompt: Option<String>,
    /// Read the prompt template from a file
    #[arg(long, value_name = "PATH")]
    prompt_file: Option<PathBuf>,
    /// Show composed prompts without calling the model
    #[arg(long)]
    prompt_preview: bool,
    /// Write the HTML report here instead of the configured path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Open the HTML report in a browser when the run ends
    #[arg(long)]
    open: bool,
    /// Config file (defaults to ./skulens.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

pub(super) fn run_analysis(args: RunArgs) -> Result<(), AppError> {
    let sql = resolve_input(args.sql, args.sql_file, "SQL query", "-- SQL query\n")?;
    let template =
        resolve_input(args.prompt, args.prompt_file, "prompt template", "# Prompt template\n")?;

    let request = AnalysisRequest {
        sql,
        template,
        prompt_preview: args.prompt_preview,
        config_path: args.config,
        report_path: args.report,
        open_report: args.open,
    };

    let report = api::run_analysis(&request)?;
    println!("📄 Report written to {}", report.report_path.display());
    Ok(())
}

/// Flag value, then file contents, then an editor session on an interactive terminal.
///
/// Resolves to an empty string when nothing was supplied; emptiness is
/// rejected by the run itself.
fn resolve_input(
    value: Option<String>,
    file: Option<PathBuf>,
    label: &str,
    editor_seed: &str,
) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path).map_err(|err| {
            AppError::Configuration(format!(
                "Failed to read {} from {}: {}",
                label,
                path.display(),
                err
            ))
        });
    }
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        return edit_input(label, editor_seed);
    }
    Ok(String::new())
}

fn edit_input(label: &str, seed: &str) -> Result<String, AppError> {
    match Editor::new().edit(seed) {
        Ok(Some(text)) => Ok(strip_seed(&text, seed)),
        Ok(None) => Ok(String::new()),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(String::new()),
        Err(err) => Err(AppError::Interaction(format!("Failed to edit {}: {}", label, err))),
    }
}

fn strip_seed(text: &str, seed: &str) -> String {
    text.strip_prefix(seed).unwrap_or(text).to_string()
}
