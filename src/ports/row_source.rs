//! Row source port definition.

use crate::domain::{AppError, RawRow};

/// Port for executing the operator's query against the catalog database.
pub trait RowSource {
    /// Run `query` verbatim and return every row in result-set order.
    fn fetch_rows(&self, query: &str) -> Result<Vec<RawRow>, AppError>;
}
