//! Service - operation registry and audited dispatch.
//!
//! `Service<S>` holds the document store, the audit sink, and a set of named
//! operation handlers. `dispatch` is the single place where audit wrapping
//! happens, so every audited operation is logged the same way.
//!
//! ## Example
//!
//! ```ignore
//! use library_catalog::api::Service;
//! use serde_json::json;
//!
//! let service = Service::new(InMemoryDocumentStore::new(), audit_sink)
//!     .operation("ping", |_ctx| Ok(json!({ "pong": true })));
//!
//! let result = service.dispatch("ping", json!({}));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::context::Context;
use super::error::ApiError;
use crate::audit::{self, AuditSink};

type Guard<S> = Box<dyn Fn(&Context<S>) -> bool + Send + Sync>;
type Handle<S> = Box<dyn Fn(&Context<S>) -> Result<Value, ApiError> + Send + Sync>;

/// A registered operation handler with optional guard.
struct OperationHandler<S> {
    guard: Option<Guard<S>>,
    handle: Handle<S>,
    audited: bool,
}

/// A service that routes named operations to handler functions.
pub struct Service<S> {
    store: S,
    audit: Arc<dyn AuditSink>,
    handlers: HashMap<String, OperationHandler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service over the given store and audit sink.
    pub fn new(store: S, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            audit,
            handlers: HashMap::new(),
        }
    }

    fn register(
        mut self,
        name: &str,
        guard: Option<Guard<S>>,
        handle: Handle<S>,
        audited: bool,
    ) -> Self {
        self.handlers.insert(
            name.to_string(),
            OperationHandler {
                guard,
                handle,
                audited,
            },
        );
        self
    }

    /// Register an audited operation.
    ///
    /// Uses builder pattern, returns `self` for chaining.
    pub fn operation<F>(self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Value, ApiError> + Send + Sync + 'static,
    {
        self.register(name, None, Box::new(handler), true)
    }

    /// Register an audited operation with a guard function.
    ///
    /// The guard runs inside the audit wrapper. If it returns `false`, the
    /// operation fails with `ApiError::GuardRejected` and an error row is written.
    pub fn operation_guarded<G, F>(self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Value, ApiError> + Send + Sync + 'static,
    {
        self.register(name, Some(Box::new(guard)), Box::new(handler), true)
    }

    /// Register an operation that is not wrapped by the audit logger.
    ///
    /// Used for the log endpoints themselves. A failure still leaves a
    /// manual error row behind.
    pub fn unaudited<F>(self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Value, ApiError> + Send + Sync + 'static,
    {
        self.register(name, None, Box::new(handler), false)
    }

    /// Dispatch an operation by name.
    pub fn dispatch(&self, operation: &str, input: Value) -> Result<Value, ApiError> {
        let handler = self
            .handlers
            .get(operation)
            .ok_or_else(|| ApiError::UnknownOperation(operation.to_string()))?;

        let ctx = Context::new(operation.to_string(), input, &self.store, self.audit.as_ref());

        let run = || {
            if let Some(guard) = &handler.guard {
                if !guard(&ctx) {
                    return Err(ApiError::GuardRejected(operation.to_string()));
                }
            }
            (handler.handle)(&ctx)
        };

        if handler.audited {
            return audit::audited(self.audit.as_ref(), operation, run);
        }

        let outcome = run();
        if let Err(e) = &outcome {
            audit::record_error(self.audit.as_ref(), operation, e);
        }
        outcome
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the audit sink.
    pub fn audit(&self) -> &dyn AuditSink {
        self.audit.as_ref()
    }
}
