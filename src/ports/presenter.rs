//! Result presentation port definition.

use crate::domain::{AppError, ProductAggregate, ProductOutcome, RunSummary};

/// Port for showing a run's progress and results to the operator.
///
/// Calls arrive in order: `start`, then `product_started`/`product_finished`
/// once per product, then either `finish` or `failed`.
pub trait Presenter {
    /// Rows are grouped; `products` sections follow.
    fn start(&mut self, _products: usize) -> Result<(), AppError> {
        Ok(())
    }

    /// The model call for `product` is about to start.
    fn product_started(&mut self, _product: &ProductAggregate) -> Result<(), AppError> {
        Ok(())
    }

    /// One product section is complete.
    fn product_finished(&mut self, outcome: &ProductOutcome) -> Result<(), AppError>;

    /// Every product was processed.
    fn finish(&mut self, _summary: &RunSummary) -> Result<(), AppError> {
        Ok(())
    }

    /// The run aborted. Sections already presented stay presented.
    fn failed(&mut self, _error: &AppError) -> Result<(), AppError> {
        Ok(())
    }
}

impl<A: Presenter, B: Presenter> Presenter for (A, B) {
    fn start(&mut self, products: usize) -> Result<(), AppError> {
        self.0.start(products)?;
        self.1.start(products)
    }

    fn product_started(&mut self, product: &ProductAggregate) -> Result<(), AppError> {
        self.0.product_started(product)?;
        self.1.product_started(product)
    }

    fn product_finished(&mut self, outcome: &ProductOutcome) -> Result<(), AppError> {
        self.0.product_finished(outcome)?;
        self.1.product_finished(outcome)
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<(), AppError> {
        self.0.finish(summary)?;
        self.1.finish(summary)
    }

    fn failed(&mut self, error: &AppError) -> Result<(), AppError> {
        self.0.failed(error)?;
        self.1.failed(error)
    }
}
