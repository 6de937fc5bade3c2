//! Wire contract of the coaching API.
//!
//! Request: `POST {"user_input": "..."}`. Success response: `{"answer": "..."}`.
//! The upstream service also returns `status` and `sources`; those are ignored.
//! Parsing lives here as pure functions so every transport (reqwest, gloo-net,
//! test doubles) shares one schema check.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoachError;

/// Outbound request body.
#[derive(Debug, Serialize)]
pub struct CoachRequest<'a> {
    pub user_input: &'a str,
}

/// Success response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachReply {
    pub answer: String,
}

/// Turn an HTTP status and raw body into the answer text.
///
/// # Errors
///
/// - [`CoachError::Server`] for any status outside `200..=299`.
/// - [`CoachError::Decode`] when the body is not JSON, or `answer` is missing,
///   not a string, or blank.
pub fn decode_answer(status: u16, body: &str) -> Result<String, CoachError> {
    if !(200..=299).contains(&status) {
        return Err(CoachError::server(status, body));
    }

    let json: Value = serde_json::from_str(body).map_err(|e| CoachError::Decode(format!("invalid JSON: {e}")))?;

    match json.get("answer") {
        Some(Value::String(answer)) if !answer.trim().is_empty() => Ok(answer.clone()),
        Some(Value::String(_)) => Err(CoachError::Decode("`answer` is blank".to_owned())),
        Some(other) => Err(CoachError::Decode(format!("`answer` is not a string: {}", json_type(other)))),
        None => Err(CoachError::Decode("missing `answer` field".to_owned())),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
