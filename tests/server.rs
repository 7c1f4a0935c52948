// tests/server.rs

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use playwatch::server::router;
use playwatch::types::Fingerprint;
use playwatch::watch::WatchRegistry;

async fn send(registry: &WatchRegistry, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    router(registry.clone()).oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_reports_online() {
    let registry = WatchRegistry::new();

    let response = send(&registry, Method::GET, "/", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Server is online!");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let registry = WatchRegistry::new();

    let response = send(&registry, Method::GET, "/anything/else", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Server is online!");
}

#[tokio::test]
async fn wake_echoes_identifier() {
    let registry = WatchRegistry::new();

    let response = send(&registry, Method::POST, "/wake", r#"{"identifier": "bot-7"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "bot-7");
}

#[tokio::test]
async fn wake_rejects_empty_or_malformed() {
    let registry = WatchRegistry::new();

    for body in [r#"{"identifier": ""}"#, "{}", "nope", ""] {
        let response = send(&registry, Method::POST, "/wake", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
    }

    let response = send(&registry, Method::GET, "/wake", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookup_registers_and_answers_json() {
    let registry = WatchRegistry::new();
    let body = r#"{"page": "https://a.test/p", "token": "t1", "callback": "https://cb.test/h"}"#;

    let response = send(&registry, Method::POST, "/lookup", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_text(response).await, r#"{"success":true}"#);

    assert_eq!(registry.len(), 1);
    let record = registry
        .get(&Fingerprint::of("https://a.test/p", "https://cb.test/h"))
        .unwrap();
    assert_eq!(record.token, "t1");
}

#[tokio::test]
async fn lookup_is_idempotent() {
    let registry = WatchRegistry::new();
    let first = r#"{"page": "https://a.test/p", "token": "t1", "callback": "https://cb.test/h"}"#;
    let second = r#"{"page": "https://a.test/p", "token": "t2", "callback": "https://cb.test/h"}"#;

    assert_eq!(send(&registry, Method::POST, "/lookup", first).await.status(), StatusCode::OK);
    assert_eq!(send(&registry, Method::POST, "/lookup", second).await.status(), StatusCode::OK);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot()[0].token, "t1");
}

#[tokio::test]
async fn lookup_rejects_invalid_input_without_mutation() {
    let registry = WatchRegistry::new();

    let bodies = [
        r#"{"page": "not-a-url", "token": "t1", "callback": "https://cb.test/h"}"#,
        r#"{"page": "https://a.test/p", "token": "t1", "callback": "not-a-url"}"#,
        r#"{"page": "https://a.test/p", "token": "", "callback": "https://cb.test/h"}"#,
        r#"{"page": "https://a.test/p", "callback": "https://cb.test/h"}"#,
        r#"{"page": 7, "token": "t1", "callback": "https://cb.test/h"}"#,
        "{",
        "",
    ];

    for body in bodies {
        let response = send(&registry, Method::POST, "/lookup", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        assert!(body_text(response).await.is_empty());
    }

    assert!(registry.is_empty());
}

#[tokio::test]
async fn lookup_requires_post() {
    let registry = WatchRegistry::new();

    let response = send(&registry, Method::GET, "/lookup", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookup_accepts_bodies_without_json_content_type() {
    let registry = WatchRegistry::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/lookup")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(
            r#"{"page": "https://a.test/p", "token": "t1", "callback": "https://cb.test/h"}"#,
        ))
        .unwrap();

    let response = router(registry.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(registry.len(), 1);
}
