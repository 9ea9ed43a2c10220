//! Reusable request-building core for lightweight API wrapper clients.
//!
//! # Overview
//! `RequestBuilder` assembles the URL and the option mapping for each call
//! and hands both to an injected [`Transport`] (host-does-IO pattern). The
//! transport returns a plain [`RawResponse`], or nothing at all, and the
//! core turns either into a uniform [`Outcome`], making the library
//! deterministic and testable without a network.
//!
//! # Design
//! - `RequestBuilder` is stateful: base URL, endpoint, verb and merged
//!   options persist across calls until overwritten.
//! - All five verb methods funnel into one private dispatch routine.
//! - Response handling is a strategy: [`ResponseInterpreter`] ships with
//!   overridable defaults (2xx check, raw-body success, `"error"`-list
//!   extraction) so a concrete wrapper only overrides what its API bends.
//! - Options are `serde_json` mappings merged with merge-distinct
//!   semantics; overrides replace, arrays are never concatenated.

pub mod builder;
pub mod config;
pub mod error;
pub mod interpret;
pub mod transport;

pub use builder::RequestBuilder;
pub use config::{merge_distinct, RequestConfig};
pub use error::{ApiError, Outcome};
pub use interpret::{DefaultInterpreter, ResponseInterpreter};
pub use transport::{Method, RawResponse, Transport};
