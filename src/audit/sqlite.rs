//! SqliteAuditSink - audit rows in a local SQLite file.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use super::{AuditError, AuditSink, LogRecord, NewLogRecord};

const CREATE_LOGS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS logs (
        log_id INTEGER PRIMARY KEY AUTOINCREMENT,
        function_name TEXT NOT NULL,
        status TEXT NOT NULL,
        execution_time REAL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
        error_message TEXT
    )";

/// Audit sink backed by a SQLite file.
///
/// Holds only the path. Each call opens its own connection and closes it
/// before returning, so the sink is freely shareable between handlers.
#[derive(Debug, Clone)]
pub struct SqliteAuditSink {
    path: PathBuf,
}

impl SqliteAuditSink {
    /// Open the sink, creating the file and the `logs` table if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sink = Self { path };
        let conn = sink.connect()?;
        conn.execute(CREATE_LOGS_TABLE, [])?;
        tracing::debug!(path = %sink.path.display(), "audit log schema ready");
        Ok(sink)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, AuditError> {
        Ok(Connection::open(&self.path)?)
    }
}

impl AuditSink for SqliteAuditSink {
    fn append(&self, record: NewLogRecord) -> Result<(), AuditError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO logs (function_name, status, execution_time, error_message)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.function_name,
                record.status,
                record.execution_time,
                record.error_message
            ],
        )?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<LogRecord>, AuditError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT log_id, function_name, status, execution_time, timestamp, error_message
             FROM logs ORDER BY timestamp DESC, log_id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(LogRecord {
                log_id: row.get(0)?,
                function_name: row.get(1)?,
                status: row.get(2)?,
                execution_time: row.get(3)?,
                timestamp: row.get(4)?,
                error_message: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn clear(&self) -> Result<usize, AuditError> {
        let conn = self.connect()?;
        Ok(conn.execute("DELETE FROM logs", [])?)
    }
}
