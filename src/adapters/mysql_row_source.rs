//! Row source backed by a MySQL connection per fetch.

use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder, Row, Value};

use crate::domain::{AppError, DatabaseConfig, RawRow};
use crate::ports::RowSource;

/// Executes queries over a fresh connection that is closed when the fetch ends.
#[derive(Debug, Clone)]
pub struct MySqlRowSource {
    config: DatabaseConfig,
}

impl MySqlRowSource {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn opts(&self) -> OptsBuilder {
        OptsBuilder::new()
            .ip_or_hostname(Some(self.config.host.as_str()))
            .tcp_port(self.config.port)
            .db_name(Some(self.config.name.as_str()))
            .user(Some(self.config.user.as_str()))
            .pass(Some(self.config.password.as_str()))
    }
}

impl RowSource for MySqlRowSource {
    fn fetch_rows(&self, query: &str) -> Result<Vec<RawRow>, AppError> {
        tracing::info!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.name,
            "connecting to database"
        );
        let mut conn = Conn::new(self.opts()).map_err(database_error)?;

        let rows: Vec<Row> = conn.query(query).map_err(database_error)?;
        tracing::info!(rows = rows.len(), "query returned");

        Ok(rows.iter().map(raw_row).collect())
    }
}

fn database_error(err: mysql::Error) -> AppError {
    AppError::Database(err.to_string())
}

fn raw_row(row: &Row) -> RawRow {
    (0..row.len()).map(|index| row.as_ref(index).and_then(cell_text)).collect()
}

/// Render a MySQL value as text; `None` for SQL NULL.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::NULL => None,
        Value::Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::Int(v) => Some(v.to_string()),
        Value::UInt(v) => Some(v.to_string()),
        Value::Float(v) => Some(v.to_string()),
        Value::Double(v) => Some(v.to_string()),
        temporal => Some(temporal.as_sql(true).trim_matches('\'').to_string()),
    }
}
