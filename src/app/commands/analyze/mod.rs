//! Analysis run: fetch rows, group them by product, classify each product.

mod input;

use crate::app::AppContext;
use crate::domain::{
    Analysis, AppError, ProductId, ProductOutcome, PromptRequest, RunSummary, group_rows,
    validate_rows,
};
use crate::ports::{ModelClient, ModelClientFactory, Presenter, RowSource};

pub use input::AnalyzeOptions;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResult {
    pub summary: RunSummary,
    pub outcomes: Vec<ProductOutcome>,
}

/// Execute one analysis run.
///
/// Blank input is rejected before the row source is touched. A database or
/// model API failure aborts the run after notifying the presenter; a model
/// response that is not JSON only marks that product's outcome.
pub fn execute<R, F, P>(
    ctx: &AppContext<R, F>,
    options: &AnalyzeOptions,
    presenter: &mut P,
) -> Result<AnalyzeResult, AppError>
where
    R: RowSource,
    F: ModelClientFactory,
    P: Presenter + ?Sized,
{
    options.validate()?;

    match run(ctx, options, presenter) {
        Ok(result) => Ok(result),
        Err(err) => {
            if let Err(present_err) = presenter.failed(&err) {
                tracing::warn!(error = %present_err, "failed to present run error");
            }
            Err(err)
        }
    }
}

fn run<R, F, P>(
    ctx: &AppContext<R, F>,
    options: &AnalyzeOptions,
    presenter: &mut P,
) -> Result<AnalyzeResult, AppError>
where
    R: RowSource,
    F: ModelClientFactory,
    P: Presenter + ?Sized,
{
    let raw_rows = ctx.rows().fetch_rows(&options.sql)?;
    let mut summary = RunSummary { rows_fetched: raw_rows.len(), ..RunSummary::default() };

    let groups = group_rows(validate_rows(raw_rows)?);
    tracing::info!(rows = summary.rows_fetched, products = groups.len(), "grouped rows");
    presenter.start(groups.len())?;

    let client: Option<Box<dyn ModelClient>> = if options.prompt_preview || groups.is_empty() {
        None
    } else {
        Some(ctx.models().create()?)
    };

    let mut outcomes = Vec::with_capacity(groups.len());
    for product in groups {
        let request = PromptRequest::for_product(&options.template, &product);
        presenter.product_started(&product)?;

        let analysis = match client.as_deref() {
            Some(client) => analyze_product(client, &request, &product.product_id)?,
            None => Analysis::Skipped,
        };
        summary.record(&analysis);

        let outcome = ProductOutcome { product, prompt: request.prompt, analysis };
        presenter.product_finished(&outcome)?;
        outcomes.push(outcome);
    }

    presenter.finish(&summary)?;
    Ok(AnalyzeResult { summary, outcomes })
}

fn analyze_product(
    client: &dyn ModelClient,
    request: &PromptRequest,
    product_id: &ProductId,
) -> Result<Analysis, AppError> {
    tracing::info!(product_id = %product_id, images = request.images.len(), "analyzing product");
    let analysis = Analysis::from_output(client.analyze(request)?);

    if let Analysis::Unparsed { error, .. } = &analysis {
        tracing::warn!(product_id = %product_id, error = %error, "model output is not valid JSON");
    }
    Ok(analysis)
}
