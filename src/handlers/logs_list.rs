//! Operation: get_logs (not audited)

use serde_json::{json, Value};

use crate::api::{ApiError, Context};

pub const OPERATION: &str = "get_logs";

pub fn handle<S>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let logs = ctx.audit().list()?;
    Ok(json!({ "logs": serde_json::to_value(logs)? }))
}
