//! Error types for catalog operations.

use thiserror::Error;

use crate::audit::AuditError;
use crate::store::{ObjectIdError, StoreError};

/// Error type for operation handlers.
///
/// Every variant renders to the same `{ "error": text }` body; the kind
/// only decides the HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No operation registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    /// Input decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Guard rejected the input.
    #[error("invalid input for {0}: expected a JSON object")]
    GuardRejected(String),
    /// Identifier is not in the store's format.
    #[error(transparent)]
    InvalidId(#[from] ObjectIdError),
    /// Resource not found. Holds the resource kind, e.g. "Book".
    #[error("{0} not found")]
    NotFound(String),
    /// Document store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Audit log failure (log endpoints only).
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::DecodeFailed(err.to_string())
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::UnknownOperation(_) => 404,
            ApiError::DecodeFailed(_) => 400,
            ApiError::GuardRejected(_) => 400,
            ApiError::InvalidId(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Store(_) => 500,
            ApiError::Audit(_) => 500,
        }
    }

    /// The `{ "error": text }` body for this error.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}
