//! Per-product results of a run.

use serde::Serialize;
use serde_json::Value;

use crate::domain::catalog::ProductAggregate;

/// Shown in place of the parsed result when the model output is not JSON.
pub const INVALID_JSON_MESSAGE: &str = "AI did not return valid JSON.";

/// What became of one product's model call.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Prompt preview: the model was not called.
    Skipped,
    /// The model output parsed as JSON.
    Parsed { raw: String, value: Value },
    /// The model output did not parse; `error` is the parser's message.
    Unparsed { raw: String, error: String },
}

impl Analysis {
    /// Classify raw model output.
    pub fn from_output(raw: String) -> Self {
        match parse_model_output(&raw) {
            Ok(value) => Analysis::Parsed { raw, value },
            Err(error) => Analysis::Unparsed { raw, error },
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            Analysis::Skipped => None,
            Analysis::Parsed { raw, .. } | Analysis::Unparsed { raw, .. } => Some(raw),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Analysis::Parsed { .. })
    }
}

/// Parse model output as JSON without assuming it is valid.
pub fn parse_model_output(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|err| err.to_string())
}

/// One product's section of the result surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOutcome {
    pub product: ProductAggregate,
    pub prompt: String,
    pub analysis: Analysis,
}

impl ProductOutcome {
    /// Pretty-printed parsed value, if the output parsed.
    pub fn pretty_json(&self) -> Option<String> {
        match &self.analysis {
            Analysis::Parsed { value, .. } => serde_json::to_string_pretty(value).ok(),
            _ => None,
        }
    }
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_fetched: usize,
    pub products: usize,
    pub parsed: usize,
    pub unparsed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, analysis: &Analysis) {
        self.products += 1;
        match analysis {
            Analysis::Skipped => self.skipped += 1,
            Analysis::Parsed { .. } => self.parsed += 1,
            Analysis::Unparsed { .. } => self.unparsed += 1,
        }
    }
}
