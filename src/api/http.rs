//! HTTP transport for the catalog - maps routes to operation dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/books?search=`: `get_all_books`
//! - `POST /api/add_book`: `add_book`
//! - `DELETE /api/delete_book/:book_id`: `delete_book`
//! - `GET /api/reviews?book_id=`: `get_all_reviews`
//! - `POST /api/add_review`: `add_review`
//! - `GET /api/logs`, `DELETE /api/logs`: log endpoints (not audited)
//! - `GET /health`: `{ "ok": true, "operations": [...] }`
//! - `GET /`, `/library`, `/reviews`, `/about`: static pages
//!
//! Query strings and path parameters become the JSON input of the
//! dispatched operation; POST bodies are passed through as-is.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::error::ApiError;
use super::pages;
use super::service::Service;
use crate::handlers;
use crate::store::DocumentStore;

type Shared<S> = State<Arc<Service<S>>>;

/// Build an axum `Router` serving the JSON API and the pages.
pub fn router<S: DocumentStore + 'static>(service: Arc<Service<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route("/api/books", get(list_books::<S>))
        .route("/api/add_book", post(add_book::<S>))
        .route("/api/delete_book/:book_id", delete(delete_book::<S>))
        .route("/api/reviews", get(list_reviews::<S>))
        .route("/api/add_review", post(add_review::<S>))
        .route("/api/logs", get(list_logs::<S>).delete(clear_logs::<S>))
        .with_state(service)
        .merge(pages::router())
}

/// Serve the catalog over HTTP at the given address until Ctrl+C.
pub async fn serve<S: DocumentStore + 'static>(
    service: Arc<Service<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "library catalog listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("received Ctrl+C, shutting down");
}

/// Turn a dispatch outcome into a JSON response.
fn respond(operation: &str, outcome: Result<Value, ApiError>) -> Response {
    match outcome {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                tracing::error!(operation, error = %e, "operation failed");
            } else {
                tracing::debug!(operation, error = %e, "operation rejected");
            }
            (status, Json(e.to_body())).into_response()
        }
    }
}

fn dispatch<S: DocumentStore + 'static>(
    service: &Service<S>,
    operation: &str,
    input: Value,
) -> Response {
    respond(operation, service.dispatch(operation, input))
}

/// A body that is not valid JSON dispatches as `null`, which the write guards reject.
fn body_or_null(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body is not JSON");
            Value::Null
        }
    }
}

/// `GET /health`: returns `{ "ok": true, "operations": [...] }`.
async fn health_handler<S: DocumentStore + 'static>(State(service): Shared<S>) -> impl IntoResponse {
    let operations: Vec<&str> = service.operations();
    Json(json!({ "ok": true, "operations": operations }))
}

async fn list_books<S: DocumentStore + 'static>(
    State(service): Shared<S>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let input = json!({ "search": params.get("search") });
    dispatch(&service, handlers::books_list::OPERATION, input)
}

async fn add_book<S: DocumentStore + 'static>(
    State(service): Shared<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&service, handlers::book_add::OPERATION, body_or_null(body))
}

async fn delete_book<S: DocumentStore + 'static>(
    State(service): Shared<S>,
    Path(book_id): Path<String>,
) -> Response {
    let input = json!({ "book_id": book_id });
    dispatch(&service, handlers::book_delete::OPERATION, input)
}

async fn list_reviews<S: DocumentStore + 'static>(
    State(service): Shared<S>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let input = json!({ "book_id": params.get("book_id") });
    dispatch(&service, handlers::reviews_list::OPERATION, input)
}

async fn add_review<S: DocumentStore + 'static>(
    State(service): Shared<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&service, handlers::review_add::OPERATION, body_or_null(body))
}

async fn list_logs<S: DocumentStore + 'static>(State(service): Shared<S>) -> Response {
    dispatch(&service, handlers::logs_list::OPERATION, json!({}))
}

async fn clear_logs<S: DocumentStore + 'static>(State(service): Shared<S>) -> Response {
    dispatch(&service, handlers::logs_clear::OPERATION, json!({}))
}
