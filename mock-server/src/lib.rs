use std::collections::HashMap;

use axum::{
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// The standard error envelope: `{"error": [...]}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Vec<String>,
}

/// What `/echo` saw: the verb, the request headers (lowercase names) and
/// the raw body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EchoReply {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/missing", get(missing))
        .route("/rejected", get(rejected))
        .route("/broken", get(broken))
        .route("/echo", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ok() -> &'static str {
    "OK"
}

async fn missing() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: vec!["not found".to_string()],
        }),
    )
}

async fn rejected() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: vec![
                "name is required".to_string(),
                "size must be positive".to_string(),
            ],
        }),
    )
}

/// A misbehaving upstream: an error status with a body that is not the
/// standard envelope.
async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<EchoReply> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("").to_string(),
            )
        })
        .collect();
    Json(EchoReply {
        method: method.to_string(),
        headers,
        body,
    })
}
