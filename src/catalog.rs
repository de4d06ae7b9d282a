//! Catalog service assembly and lifecycle.

use std::sync::Arc;

use crate::api::Service;
use crate::audit::{AuditError, AuditSink, SqliteAuditSink};
use crate::config::Config;
use crate::handlers;
use crate::register_operations;
use crate::store::DocumentStore;

/// Build the catalog service over an existing store and audit sink.
///
/// Book and review operations are audited; the log operations are not.
pub fn service<S: DocumentStore + 'static>(store: S, audit: Arc<dyn AuditSink>) -> Service<S> {
    register_operations!(
        Service::new(store, audit),
        handlers::books_list,
        handlers::book_add,
        handlers::book_delete,
        handlers::reviews_list,
        handlers::review_add,
    )
    .unaudited(handlers::logs_list::OPERATION, handlers::logs_list::handle)
    .unaudited(handlers::logs_clear::OPERATION, handlers::logs_clear::handle)
}

/// Open the catalog: provision the audit log file and schema, then build the service.
///
/// Dropping the returned service releases the store; the audit sink holds no
/// open connection between calls.
pub fn open<S: DocumentStore + 'static>(store: S, config: &Config) -> Result<Service<S>, AuditError> {
    let sink = SqliteAuditSink::open(&config.audit_db_path)?;
    tracing::info!(audit_db = %sink.path().display(), "catalog opened");
    Ok(service(store, Arc::new(sink)))
}
