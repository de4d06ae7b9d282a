//! Operation: delete_logs (not audited, irreversible)

use serde_json::{json, Value};

use crate::api::{ApiError, Context};

pub const OPERATION: &str = "delete_logs";

pub fn handle<S>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let removed = ctx.audit().clear()?;
    tracing::info!(removed, "audit log cleared");
    Ok(json!({ "message": "All logs deleted successfully" }))
}
