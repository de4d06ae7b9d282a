//! Context passed to operation handlers.
//!
//! Carries the parsed input plus references to the document store and the
//! audit sink. Handlers reach everything they need through the context.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::audit::{self, AuditSink};

/// The context passed to every operation handler.
///
/// Generic over `S` (the document store type) so handlers work against any
/// backend the service is configured with.
pub struct Context<'a, S> {
    /// The operation name being handled.
    operation: String,
    /// JSON input: request body, or query/path parameters folded into an object.
    input: Value,
    store: &'a S,
    audit: &'a dyn AuditSink,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(
        operation: String,
        input: Value,
        store: &'a S,
        audit: &'a dyn AuditSink,
    ) -> Self {
        Self {
            operation,
            input,
            store,
            audit,
        }
    }

    /// Deserialize the input into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.input.clone()).map_err(|e| ApiError::DecodeFailed(e.to_string()))
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        self.store
    }

    /// Get the audit sink.
    pub fn audit(&self) -> &dyn AuditSink {
        self.audit
    }

    /// Record an error row under this operation's name without failing it.
    pub fn record_error(&self, message: impl Display) {
        audit::record_error(self.audit, &self.operation, message);
    }

    /// Check if the input is a JSON object.
    pub fn is_object(&self) -> bool {
        self.input.is_object()
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }
}
