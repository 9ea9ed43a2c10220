//! The seam between the builder and the host's HTTP machinery.
//!
//! # Design
//! This crate performs no network I/O. A host implements [`Transport`] over
//! whatever HTTP client it already ships and decides which option keys it
//! honors. Responses cross the seam as plain owned data so implementations
//! stay trivial to write and to fake in tests.

use crate::config::RequestConfig;

/// HTTP verb for a request. Dispatch writes the uppercase wire name into
/// the option mapping under the `"method"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Uppercase wire name, e.g. `"GET"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// An HTTP response as plain data, produced by a [`Transport`].
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Host-provided request execution.
///
/// `execute` blocks until the request finishes one way or the other:
///
/// - `Some(response)` for anything the host's client produced a response
///   for, HTTP error statuses included. A host whose client reports errors
///   as structured values rather than responses should synthesize a
///   [`RawResponse`] from them, so they flow through normal error
///   interpretation.
/// - `None` when no response exists at all (connection refused, DNS
///   failure, and the like). The builder maps this to
///   [`ApiError::TransportUnavailable`].
///
/// Any timeout is just a value in the option mapping; enforcing it is the
/// implementation's business.
///
/// [`ApiError::TransportUnavailable`]: crate::error::ApiError::TransportUnavailable
pub trait Transport {
    fn execute(&self, url: &str, config: &RequestConfig) -> Option<RawResponse>;
}

/// A shared reference executes through the underlying transport, so one
/// host client can serve any number of builders.
impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, url: &str, config: &RequestConfig) -> Option<RawResponse> {
        (**self).execute(url, config)
    }
}
