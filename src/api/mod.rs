//! api: operation registry, handler context, and HTTP transport.
//!
//! Operations are registered by name on a `Service`. Each handler receives a
//! `Context<S>` with the input payload, the document store, and the audit
//! sink. Dispatching an audited operation writes exactly one audit row.
//!
//! ## Handler Convention
//!
//! ```ignore
//! // src/handlers/book_add.rs
//!
//! pub const OPERATION: &str = "add_book";
//!
//! pub fn guard<S>(ctx: &api::Context<S>) -> bool {
//!     ctx.is_object()
//! }
//!
//! pub fn handle<S: DocumentStore>(ctx: &api::Context<S>) -> Result<Value, api::ApiError> {
//!     let input = ctx.input::<Input>()?;
//!     let id = ctx.store().collection::<Book>().insert(&book)?;
//!     Ok(json!({ "book_id": id.to_string() }))
//! }
//! ```

mod context;
mod error;
mod service;

pub use context::Context;
pub use error::ApiError;
pub use service::Service;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
mod pages;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register audited handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `OPERATION: &str`: the operation name
/// - `guard(ctx) -> bool`: input validation
/// - `handle(ctx) -> Result<Value, ApiError>`: the handler
///
/// # Example
/// ```ignore
/// let service = library_catalog::register_operations!(
///     api::Service::new(store, audit),
///     handlers::book_add,
///     handlers::book_delete,
/// );
/// ```
#[macro_export]
macro_rules! register_operations {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .operation_guarded(
                $($seg)::+::OPERATION,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
