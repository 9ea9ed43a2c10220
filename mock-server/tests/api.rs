use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, EchoReply, ErrorBody};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body.to_string())
        .unwrap()
}

// --- fixed routes ---

#[tokio::test]
async fn ok_replies_with_plain_ok() {
    let resp = app().oneshot(request("GET", "/ok", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"OK");
}

#[tokio::test]
async fn missing_replies_with_the_error_envelope() {
    let resp = app().oneshot(request("GET", "/missing", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, vec!["not found"]);
}

#[tokio::test]
async fn rejected_lists_every_validation_message() {
    let resp = app().oneshot(request("GET", "/rejected", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, vec!["name is required", "size must be positive"]);
}

#[tokio::test]
async fn broken_replies_with_a_non_envelope_body() {
    let resp = app().oneshot(request("GET", "/broken", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body_bytes(resp).await.to_vec()).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_headers_and_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/echo")
        .header("x-marker", "1")
        .body(r#"{"a":1}"#.to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "POST");
    assert_eq!(reply.headers.get("x-marker").map(String::as_str), Some("1"));
    assert_eq!(reply.body, r#"{"a":1}"#);
}

#[tokio::test]
async fn echo_accepts_any_verb() {
    let resp = app().oneshot(request("PATCH", "/echo", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "PATCH");
    assert!(reply.body.is_empty());
}
