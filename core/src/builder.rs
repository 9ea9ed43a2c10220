//! Request assembly and the single dispatch routine.
//!
//! # Design
//! `RequestBuilder` is the stateful heart of a wrapper client: base URL and
//! default options are configured once, per-call options are layered on
//! with [`add_args`], and every verb method funnels into one dispatch
//! routine that hands the assembled option mapping to the injected
//! [`Transport`] and routes the response through the injected
//! [`ResponseInterpreter`].
//!
//! Configuration state deliberately persists across calls: endpoint, merged
//! args and the written `"method"` key all carry over until overwritten.
//! The persistence is documented, tested behavior; callers wanting a clean
//! slate replace the options with [`set_args`].
//!
//! [`add_args`]: RequestBuilder::add_args
//! [`set_args`]: RequestBuilder::set_args

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{merge_distinct, RequestConfig};
use crate::error::{ApiError, Outcome};
use crate::interpret::{DefaultInterpreter, ResponseInterpreter};
use crate::transport::{Method, Transport};

/// Stateful request assembler for one third-party API.
///
/// Holds the base URL, the current endpoint and verb, and the merged option
/// mapping; delegates I/O to `T` and response handling to `I`. Verb methods
/// take `&mut self` because dispatch writes into the stored options, so the
/// borrow checker already rules out sharing one builder across concurrent
/// logical requests; share the transport instead and give each request its
/// own builder.
pub struct RequestBuilder<T, I = DefaultInterpreter> {
    base_url: String,
    endpoint: String,
    method: Method,
    args: RequestConfig,
    json_encode_body: bool,
    transport: T,
    interpreter: I,
}

impl<T: Transport> RequestBuilder<T> {
    /// A builder with the stock response interpretation.
    pub fn new(transport: T) -> Self {
        Self::with_interpreter(transport, DefaultInterpreter)
    }
}

impl<T: Transport, I: ResponseInterpreter> RequestBuilder<T, I> {
    /// A builder with a custom [`ResponseInterpreter`].
    pub fn with_interpreter(transport: T, interpreter: I) -> Self {
        Self {
            base_url: String::new(),
            endpoint: String::new(),
            method: Method::default(),
            args: RequestConfig::new(),
            json_encode_body: false,
            transport,
            interpreter,
        }
    }

    /// Stores the base URL verbatim, with no validation or trailing-slash
    /// handling. The caller owns the separator between base URL and
    /// endpoint.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    /// Replaces the stored option mapping wholesale.
    pub fn set_args(&mut self, args: RequestConfig) {
        self.args = args;
    }

    /// Layers `partial` over the stored options with merge-distinct
    /// semantics; `partial` itself is left untouched.
    pub fn add_args(&mut self, partial: &RequestConfig) {
        self.args = merge_distinct(&self.args, partial);
    }

    /// Stores the endpoint suffix verbatim.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Stores the verb for the next dispatch. The verb methods call this;
    /// it is public for wrappers that pick the verb dynamically.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// When enabled, a mapping under the `"body"` option is serialized to a
    /// compact JSON string at dispatch time. Off by default; host clients
    /// commonly form-encode mapping bodies unless told otherwise.
    pub fn set_json_encode_body(&mut self, enabled: bool) {
        self.json_encode_body = enabled;
    }

    /// The currently stored option mapping.
    pub fn args(&self) -> &RequestConfig {
        &self.args
    }

    /// The URL the next dispatch will hit: base URL and endpoint
    /// concatenated as-is.
    pub fn request_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    /// Dispatches with the GET verb.
    pub fn get(&mut self) -> Outcome {
        self.set_method(Method::Get);
        self.dispatch()
    }

    /// Dispatches with the POST verb.
    pub fn post(&mut self) -> Outcome {
        self.set_method(Method::Post);
        self.dispatch()
    }

    /// Dispatches with the PUT verb.
    pub fn put(&mut self) -> Outcome {
        self.set_method(Method::Put);
        self.dispatch()
    }

    /// Dispatches with the DELETE verb.
    pub fn delete(&mut self) -> Outcome {
        self.set_method(Method::Delete);
        self.dispatch()
    }

    /// Dispatches with the PATCH verb.
    pub fn patch(&mut self) -> Outcome {
        self.set_method(Method::Patch);
        self.dispatch()
    }

    /// The single request lifecycle: write the verb into the options,
    /// encode the body if asked to, hand the mapping to the transport,
    /// route the response through the interpreter.
    fn dispatch(&mut self) -> Outcome {
        self.args.insert(
            "method".to_string(),
            Value::String(self.method.as_str().to_string()),
        );

        if self.json_encode_body {
            if let Some(body) = self.args.get("body") {
                if body.is_object() {
                    // A `Value` mapping always serializes: keys are strings,
                    // numbers are finite.
                    if let Ok(encoded) = serde_json::to_string(body) {
                        self.args.insert("body".to_string(), Value::String(encoded));
                    }
                }
            }
        }

        let url = self.request_url();
        debug!(method = self.method.as_str(), %url, "dispatching request");

        let Some(response) = self.transport.execute(&url, &self.args) else {
            warn!(%url, "transport produced no response");
            return Err(ApiError::TransportUnavailable);
        };

        debug!(status = response.status, "response received");
        if self.interpreter.is_success(&response) {
            self.interpreter.on_success(&response)
        } else {
            self.interpreter.on_error(&response)
        }
    }
}
