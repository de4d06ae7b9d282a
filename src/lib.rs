//! library_catalog: a small library catalog service.
//!
//! Books and reviews live in a document store; every API call's outcome is
//! appended to a SQLite audit log. The HTTP surface (feature `http`) serves
//! a JSON API plus a few static pages.

pub mod api;
pub mod audit;
pub mod catalog;
pub mod config;
pub mod handlers;
pub mod models;
pub mod store;

pub use api::{ApiError, Context, Service};
pub use audit::{AuditSink, LogRecord, LogStatus, SqliteAuditSink};
pub use config::Config;
pub use models::{Book, Review};
pub use store::{DocumentStore, InMemoryDocumentStore, ObjectId};

/// Crate version, reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
