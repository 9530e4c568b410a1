//! Plain-text result surface for the terminal.

use std::io::{self, Write};

use crate::domain::{
    Analysis, AppError, INVALID_JSON_MESSAGE, ProductAggregate, ProductOutcome, RunSummary,
};
use crate::ports::Presenter;

const DIVIDER: &str = "────────────────────────────────────────────────────────────";

/// Writes one section per product to `W` as results arrive.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn start(&mut self, products: usize) -> Result<(), AppError> {
        if products == 0 {
            writeln!(self.out, "⚠️  Query returned no rows")?;
        }
        Ok(())
    }

    fn product_started(&mut self, product: &ProductAggregate) -> Result<(), AppError> {
        writeln!(self.out, "{}", DIVIDER)?;
        writeln!(self.out, "Product ID: {} | SKU: {}", product.product_id, product.sku)?;
        writeln!(self.out, "Images:")?;
        for url in &product.images {
            writeln!(self.out, "  - {}", url)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn product_finished(&mut self, outcome: &ProductOutcome) -> Result<(), AppError> {
        match &outcome.analysis {
            Analysis::Skipped => {
                writeln!(self.out, "\n### Prompt")?;
                writeln!(self.out, "{}", outcome.prompt)?;
            }
            Analysis::Parsed { raw, .. } => {
                writeln!(self.out, "\n### Raw AI Output")?;
                writeln!(self.out, "{}", raw)?;
                writeln!(self.out, "\n### Parsed Result")?;
                writeln!(self.out, "{}", outcome.pretty_json().unwrap_or_default())?;
            }
            Analysis::Unparsed { raw, .. } => {
                writeln!(self.out, "\n### Raw AI Output")?;
                writeln!(self.out, "{}", raw)?;
                writeln!(self.out, "\n❌ {}", INVALID_JSON_MESSAGE)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<(), AppError> {
        writeln!(self.out, "{}", DIVIDER)?;
        if summary.products > 0 && summary.skipped == summary.products {
            writeln!(self.out, "✅ Previewed {} product prompt(s)", summary.products)?;
        } else {
            writeln!(
                self.out,
                "✅ Analyzed {} product(s): {} parsed, {} invalid JSON",
                summary.products, summary.parsed, summary.unparsed
            )?;
        }
        Ok(())
    }

    fn failed(&mut self, _error: &AppError) -> Result<(), AppError> {
        // The error itself is reported once by the CLI entry point.
        writeln!(self.out, "{}", DIVIDER)?;
        self.out.flush()?;
        Ok(())
    }
}
