mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app_with_limit;
use common::http::{assert_json_error, request, response_json};

#[tokio::test]
async fn it_rate_limit_triggers_429_with_headers() {
    let app = spawn_test_app_with_limit(3).await;

    let mut last = None;
    for _ in 0..4 {
        let response = request(&app.app, Method::GET, "/api/topics/popular", None, &[]).await;
        last = Some(response_json(response).await);
    }

    let (status, headers, body) = last.expect("at least one response");
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_json_error(&body, "RATE_LIMITED");
    assert!(headers.get("retry-after").is_some());
    assert!(headers.get("ratelimit-limit").is_some());
    assert_eq!(headers["ratelimit-remaining"], "0");
    assert!(headers.get("ratelimit-reset").is_some());
}

#[tokio::test]
async fn it_health_is_not_rate_limited() {
    let app = spawn_test_app_with_limit(1).await;

    for _ in 0..3 {
        let response = request(&app.app, Method::GET, "/health/live", None, &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
