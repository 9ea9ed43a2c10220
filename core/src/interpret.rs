//! Response interpretation hooks.
//!
//! # Design
//! "Is this a success", "shape the success value" and "shape the failure
//! value" are a strategy trait with default method bodies: a custom
//! interpreter overrides exactly the hooks it cares about and inherits the
//! rest, and the builder takes the strategy at construction time. APIs with
//! a different error shape get a small interpreter instead of a fork of the
//! dispatch routine.

use serde_json::Value;

use crate::error::{ApiError, Outcome};
use crate::transport::RawResponse;

/// Strategy for turning a [`RawResponse`] into an [`Outcome`].
pub trait ResponseInterpreter {
    /// Whether the response counts as success. Default: status in [200, 300).
    fn is_success(&self, response: &RawResponse) -> bool {
        (200..300).contains(&response.status)
    }

    /// Shape the success value. Default: the raw body, unparsed.
    fn on_success(&self, response: &RawResponse) -> Outcome {
        Ok(response.body.clone())
    }

    /// Shape the failure value. The default expects a JSON body exposing an
    /// `error` field (a list of messages, or a single string) and joins the
    /// messages with commas. A body in any other shape produces
    /// [`ApiError::MalformedErrorBody`] rather than a panic.
    fn on_error(&self, response: &RawResponse) -> Outcome {
        match error_messages(&response.body) {
            Some(messages) => Err(ApiError::Http {
                status: response.status,
                message: messages.join(","),
                body: response.body.clone(),
            }),
            None => Err(ApiError::MalformedErrorBody {
                status: response.status,
                body: response.body.clone(),
            }),
        }
    }
}

/// The stock interpretation: 2xx is success, success is the raw body,
/// failures carry comma-joined messages from the body's `error` list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInterpreter;

impl ResponseInterpreter for DefaultInterpreter {}

/// Extracts the message list from an `{"error": ...}` body, accepting a
/// list of values or a single string. `None` for every other shape.
fn error_messages(body: &str) -> Option<Vec<String>> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("error")? {
        Value::Array(items) => Some(items.iter().map(message_text).collect()),
        Value::String(message) => Some(vec![message.clone()]),
        _ => None,
    }
}

/// A list element's textual content: strings verbatim, anything else as
/// its compact JSON text.
fn message_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
