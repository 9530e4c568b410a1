use crate::domain::{AppError, ProductAggregate, ProductOutcome, RunSummary};
use crate::ports::Presenter;

/// Records presenter calls as short event strings.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn start(&mut self, products: usize) -> Result<(), AppError> {
        self.events.push(format!("start:{}", products));
        Ok(())
    }

    fn product_started(&mut self, product: &ProductAggregate) -> Result<(), AppError> {
        self.events.push(format!("started:{}", product.product_id));
        Ok(())
    }

    fn product_finished(&mut self, outcome: &ProductOutcome) -> Result<(), AppError> {
        self.events.push(format!("finished:{}", outcome.product.product_id));
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<(), AppError> {
        self.events.push("finish".to_string());
        Ok(())
    }

    fn failed(&mut self, _error: &AppError) -> Result<(), AppError> {
        self.events.push("failed".to_string());
        Ok(())
    }
}
