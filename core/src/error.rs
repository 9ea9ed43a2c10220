//! Failure values for dispatched requests.
//!
//! # Design
//! Failures are ordinary values, never panics: every verb method and every
//! interpreter hook returns [`Outcome`] and callers match on the tag. The
//! accessors mirror the host error convention (numeric code, message, raw
//! data payload) so a host adapter can translate mechanically.

use thiserror::Error;

/// Result of a dispatched request: the response body on success, a
/// structured failure otherwise.
pub type Outcome = Result<String, ApiError>;

/// Failure taxonomy for a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport produced no response at all. Fixed code 400.
    #[error("Error when sending request")]
    TransportUnavailable,

    /// The response carried a non-2xx status and a recognizable error body.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: String,
    },

    /// The response carried a non-2xx status but its body did not expose
    /// the expected `error` field, so no message could be extracted.
    #[error("HTTP {status}: unrecognized error body")]
    MalformedErrorBody { status: u16, body: String },
}

impl ApiError {
    /// Numeric code in the host error convention: the HTTP status, or the
    /// fixed 400 when the transport produced no response.
    pub fn code(&self) -> u16 {
        match self {
            ApiError::TransportUnavailable => 400,
            ApiError::Http { status, .. } | ApiError::MalformedErrorBody { status, .. } => *status,
        }
    }

    /// Human-readable message in the host error convention.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Raw response body carried as context; empty when no response exists.
    pub fn data(&self) -> &str {
        match self {
            ApiError::TransportUnavailable => "",
            ApiError::Http { body, .. } | ApiError::MalformedErrorBody { body, .. } => body,
        }
    }
}
