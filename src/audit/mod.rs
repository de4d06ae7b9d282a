//! Audit log - append-only record of API call outcomes.
//!
//! Every audited operation produces exactly one `LogRecord`: a success row
//! carrying the execution time, or an error row carrying the error message.
//! The log is observability data; nothing in the catalog reads it back except
//! the log endpoints themselves.
//!
//! ## Example
//!
//! ```ignore
//! use library_catalog::audit::{audited, SqliteAuditSink};
//!
//! let sink = SqliteAuditSink::open("db/books.db")?;
//! let books = audited(&sink, "get_all_books", || list_books(&store))?;
//! let rows = sink.list()?;
//! ```

mod recorder;
mod sqlite;

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of an audited call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Success,
    Error,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "success",
            LogStatus::Error => "error",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for LogStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for LogStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "success" => Ok(LogStatus::Success),
            "error" => Ok(LogStatus::Error),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// A persisted audit row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub log_id: i64,
    pub function_name: String,
    pub status: LogStatus,
    /// Seconds, rounded to 4 decimal places. Present only on success.
    pub execution_time: Option<f64>,
    /// Creation time as written by the store (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub timestamp: String,
    /// Present only on error.
    pub error_message: Option<String>,
}

/// A row to append; the sink assigns `log_id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogRecord {
    pub function_name: String,
    pub status: LogStatus,
    pub execution_time: Option<f64>,
    pub error_message: Option<String>,
}

impl NewLogRecord {
    /// A success row with the elapsed time in seconds.
    pub fn success(function_name: impl Into<String>, execution_time: f64) -> Self {
        Self {
            function_name: function_name.into(),
            status: LogStatus::Success,
            execution_time: Some(execution_time),
            error_message: None,
        }
    }

    /// An error row; execution time is always null.
    pub fn error(function_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            status: LogStatus::Error,
            execution_time: None,
            error_message: Some(message.into()),
        }
    }
}

/// Error type for audit sink operations.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("audit IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only sink for audit rows.
///
/// Implementations must be shareable across request handlers.
pub trait AuditSink: Send + Sync {
    /// Append one row.
    fn append(&self, record: NewLogRecord) -> Result<(), AuditError>;

    /// All rows, newest first.
    fn list(&self) -> Result<Vec<LogRecord>, AuditError>;

    /// Delete every row. Returns the number removed.
    fn clear(&self) -> Result<usize, AuditError>;
}

pub use recorder::{audited, record_error, round_to};
pub use sqlite::SqliteAuditSink;
