use crate::domain::{AppError, RawRow};
use crate::ports::RowSource;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeRowSource {
    rows: Vec<RawRow>,
    failure: Option<String>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeRowSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows, failure: None, queries: Arc::new(Mutex::new(vec![])) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::new(vec![]) }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl RowSource for FakeRowSource {
    fn fetch_rows(&self, query: &str) -> Result<Vec<RawRow>, AppError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.failure {
            Some(message) => Err(AppError::Database(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}
