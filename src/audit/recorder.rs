//! Request logging wrapper - times an operation and writes one audit row.

use std::fmt::Display;
use std::time::Instant;

use super::{AuditSink, NewLogRecord};

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value, ties to even, so `4.25` becomes `4.2` and
/// `4.35` (stored as 4.3499...) becomes `4.3`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Run `op` once and append exactly one audit row describing the outcome.
///
/// Success rows carry the elapsed seconds rounded to 4 places; error rows
/// carry the stringified error and no execution time. The outcome is
/// returned unchanged. A failing audit write is logged and otherwise
/// ignored, it never replaces the operation's own result.
pub fn audited<T, E, F>(sink: &dyn AuditSink, function_name: &str, op: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    let started = Instant::now();
    let outcome = op();

    let record = match &outcome {
        Ok(_) => {
            let elapsed = round_to(started.elapsed().as_secs_f64(), 4);
            NewLogRecord::success(function_name, elapsed)
        }
        Err(e) => NewLogRecord::error(function_name, e.to_string()),
    };
    append_or_warn(sink, record);

    outcome
}

/// Manual error path: append an error row outside the wrapper.
///
/// Used for data-quality faults that are recorded but not surfaced.
pub fn record_error(sink: &dyn AuditSink, function_name: &str, message: impl Display) {
    append_or_warn(sink, NewLogRecord::error(function_name, message.to_string()));
}

fn append_or_warn(sink: &dyn AuditSink, record: NewLogRecord) {
    let function_name = record.function_name.clone();
    let status = record.status;
    if let Err(e) = sink.append(record) {
        tracing::warn!(
            function = %function_name,
            status = %status,
            error = %e,
            "failed to write audit record"
        );
    }
}
