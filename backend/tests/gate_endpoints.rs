use axum::http::StatusCode;
use buyermap::{server::build_router, AppConfig};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a raw body via `oneshot` and return (status, parsed JSON body).
async fn post_raw(app: axum::Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn gated_app() -> axum::Router {
    build_router(AppConfig::default().with_beta_password("abc123"))
}

// ---------------------------------------------------------------------------
// POST /api/verify-password
// ---------------------------------------------------------------------------

#[tokio::test]
async fn verify_password_accepts_configured_secret() {
    let (status, json) =
        post_raw(gated_app(), "/api/verify-password", r#"{"password":"abc123"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true }));
}

#[tokio::test]
async fn verify_password_rejects_wrong_password_with_200() {
    let (status, json) =
        post_raw(gated_app(), "/api/verify-password", r#"{"password":"wrong"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": false }));
}

#[tokio::test]
async fn verify_password_without_secret_is_configuration_error() {
    let app = build_router(AppConfig::default());
    let (status, json) = post_raw(app, "/api/verify-password", r#"{"password":"abc123"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({ "success": false, "error": "Server configuration error" })
    );
}

#[tokio::test]
async fn verify_password_malformed_body_is_internal_error() {
    for body in ["not json", "{}", r#"{"password":42}"#, ""] {
        let (status, json) = post_raw(gated_app(), "/api/verify-password", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body:?}");
        assert_eq!(
            json,
            json!({ "success": false, "error": "Internal server error" })
        );
    }
}

#[tokio::test]
async fn verify_password_oversized_body_is_internal_error() {
    // Above axum's default 2 MiB body limit.
    let body = format!(r#"{{"password":"{}"}}"#, "a".repeat(3 * 1024 * 1024));
    let (status, json) = post_raw(gated_app(), "/api/verify-password", &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({ "success": false, "error": "Internal server error" })
    );
}

#[tokio::test]
async fn verify_password_rejects_get() {
    let (status, _) = get(gated_app(), "/api/verify-password").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// GET /api/test-slack
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_slack_without_url_is_configuration_error() {
    let app = build_router(AppConfig::default());
    let (status, json) = get(app, "/api/test-slack").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "SLACK_WEBHOOK_URL not configured" }));
}

#[tokio::test]
async fn test_slack_relays_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/services/T000/B000/XXXX")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({
            "text": buyermap::TEST_NOTIFICATION_TEXT
        })))
        .with_status(200)
        .with_body("ok")
        .expect(1)
        .create_async()
        .await;

    let config = AppConfig::default()
        .with_slack_webhook_url(format!("{}/services/T000/B000/XXXX", server.url()));
    let (status, json) = get(build_router(config), "/api/test-slack").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "message": "Test notification sent to Slack!" })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_slack_reports_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/hook")
        .with_status(404)
        .with_body("no_service")
        .create_async()
        .await;

    let config = AppConfig::default().with_slack_webhook_url(format!("{}/hook", server.url()));
    let (status, json) = get(build_router(config), "/api/test-slack").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Slack API error: 404" }));
}

#[tokio::test]
async fn test_slack_transport_failure_is_test_failed() {
    // Nothing listens on port 1.
    let config = AppConfig::default().with_slack_webhook_url("http://127.0.0.1:1/hook");
    let (status, json) = get(build_router(config), "/api/test-slack").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Test failed" }));
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_configuration_without_secrets() {
    let (status, json) = get(gated_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "buyermap");
    assert_eq!(json["configured"]["betaGate"], true);
    assert_eq!(json["configured"]["slackWebhook"], false);
    assert!(!json.to_string().contains("abc123"));
}
