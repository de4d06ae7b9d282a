//! Rating parsing and averaging.
//!
//! Ratings arrive untyped. A rating counts toward a book's average when it is
//! a JSON number, or a string that parses to a finite number once trimmed.

use serde_json::Value;
use thiserror::Error;

use crate::audit::round_to;

/// Why a stored rating was left out of the average.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating is missing")]
    Missing,
    #[error("could not convert string to float: '{0}'")]
    NotNumeric(String),
    #[error("rating must be a number or a numeric string, got {0}")]
    UnsupportedType(&'static str),
}

/// Parse a stored rating into a finite number.
pub fn parse(rating: Option<&Value>) -> Result<f64, RatingError> {
    let value = match rating {
        None | Some(Value::Null) => return Err(RatingError::Missing),
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(_) => return Err(RatingError::UnsupportedType("a boolean")),
        Value::Array(_) => return Err(RatingError::UnsupportedType("an array")),
        Value::Object(_) => return Err(RatingError::UnsupportedType("an object")),
        Value::Null => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(RatingError::NotNumeric(value_text(value))),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Arithmetic mean rounded to one decimal place, or `None` for no ratings.
pub fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: f64 = ratings.iter().sum();
    Some(round_to(sum / ratings.len() as f64, 1))
}
