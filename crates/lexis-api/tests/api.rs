use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use lexis_api::routes::create_router;
use lexis_api::state::AppState;
use lexis_common::config::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

fn config(locale: &str) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        locale: locale.to_string(),
        reading_speed: "adaptive".to_string(),
        fixed_wpm: 200.0,
    }
}

fn app(locale: &str) -> Router {
    let state = AppState::new(&config(locale)).expect("valid test config");
    create_router(state)
}

async fn post_analyze(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn analyze_returns_statistics() {
    let (status, body) =
        post_analyze(app("en"), json!({ "text": "Hello. World! How are you?" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["charCount"], 26);
    assert_eq!(body["wordCount"], 5);
    assert_eq!(body["sentenceCount"], 3);
    assert_eq!(body["readingTime"], "less than a minute");
    // Five distinct words, one occurrence each: alphabetical tie-break.
    assert_eq!(body["frequentWords"][0], json!({ "word": "are", "count": 1 }));
    assert_eq!(body["frequentWords"][1], json!({ "word": "hello", "count": 1 }));
}

#[tokio::test]
async fn analyze_honors_custom_delimiter() {
    let (status, body) = post_analyze(
        app("en"),
        json!({ "text": "Hello. World! How are you?", "delimiter": "," }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentenceCount"], 1);
}

#[tokio::test]
async fn analyze_defaults_to_russian_labels() {
    let (status, body) = post_analyze(app("ru"), json!({ "text": "Привет, мир!" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["readingTime"], "меньше минуты");
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let (status, body) = post_analyze(app("en"), json!({ "text": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("text cannot be empty"));
}

#[tokio::test]
async fn malformed_json_gets_a_json_error_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let response = app("en").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn analyze_only_accepts_post() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/analyze")
        .body(Body::empty())
        .unwrap();

    let response = app("en").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn preflight_is_answered_with_permissive_cors() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/analyze")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app("en").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app("en").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn home_page_documents_the_endpoint() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app("en").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("POST /api/analyze"));
}

#[tokio::test]
async fn unknown_locale_fails_state_construction() {
    assert!(AppState::new(&config("de")).is_err());
}
