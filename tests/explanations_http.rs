mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app;
use common::http::{assert_json_error, assert_status_ok_json, request, resolve, response_json};

#[tokio::test]
async fn it_first_resolution_creates_then_repeats_are_served() {
    let app = spawn_test_app().await;

    let (status, first) = resolve(&app.app, "Quadratic Equations").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_status_ok_json(status, &first);
    assert_eq!(first["data"]["created"], true);
    assert_eq!(first["data"]["topic"]["title"], "Quadratic Equations");
    assert_eq!(first["data"]["topic"]["category"], "Algebra");
    assert_eq!(first["data"]["topic"]["searchCount"], 1);

    let (_, second) = resolve(&app.app, "quadratic equations").await;
    let (status, third) = resolve(&app.app, "QUADRATIC EQUATIONS").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["created"], false);
    assert_eq!(third["data"]["topic"]["searchCount"], 3);
    assert_eq!(third["data"]["explanation"], first["data"]["explanation"]);
}

#[tokio::test]
async fn it_explanation_payload_uses_camel_case_fields() {
    let app = spawn_test_app().await;

    let (_, body) = resolve(&app.app, "the pythagorean theorem please").await;
    let explanation = &body["data"]["explanation"];
    assert!(explanation["simpleSummary"].is_string());
    assert!(explanation["detailedExplanation"].is_string());
    assert_eq!(explanation["formulas"].as_array().unwrap().len(), 3);
    assert!(explanation["commonMistakes"].is_array());
    assert!(explanation["tipsAndTricks"].is_array());
    assert!(explanation["practiceIdeas"].is_string());
    assert_eq!(explanation["topicId"], body["data"]["topic"]["id"]);

    let steps = explanation["steps"].as_array().unwrap();
    for (idx, step) in steps.iter().enumerate() {
        assert_eq!(step["step"].as_u64().unwrap(), idx as u64 + 1);
    }
}

#[tokio::test]
async fn it_unknown_topic_gets_generic_explanation() {
    let app = spawn_test_app().await;

    let (status, body) = resolve(&app.app, "  fourier transform  ").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["topic"]["title"], "fourier transform");
    assert_eq!(body["data"]["topic"]["category"], "General");
    assert_eq!(body["data"]["topic"]["difficulty"], "intermediate");
    assert!(body["data"]["explanation"]["formulas"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn it_blank_topic_is_rejected() {
    let app = spawn_test_app().await;

    let (status, body) = resolve(&app.app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_TOPIC");
    assert_eq!(app.state.store().count_topics().unwrap(), 0);
}

#[tokio::test]
async fn it_long_topic_is_resolved() {
    let app = spawn_test_app().await;

    let topic = "series convergence ".repeat(20);
    let (status, body) = resolve(&app.app, &topic).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["topic"]["title"], topic.trim());
}

#[tokio::test]
async fn it_oversized_body_is_rejected() {
    let app = spawn_test_app().await;

    let (status, body) = resolve(&app.app, &"x".repeat(70 * 1024)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
    assert_eq!(app.state.store().count_topics().unwrap(), 0);
}

#[tokio::test]
async fn it_malformed_body_is_rejected() {
    let app = spawn_test_app().await;

    let response = request(
        &app.app,
        Method::POST,
        "/api/explanations",
        Some(serde_json::json!({ "subject": "limits" })),
        &[],
    )
    .await;
    let (status, _, body) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn it_topic_detail_includes_explanations() {
    let app = spawn_test_app().await;

    let (_, body) = resolve(&app.app, "Fourier Transform").await;
    let topic_id = body["data"]["topic"]["id"].as_str().unwrap().to_string();

    let response = request(
        &app.app,
        Method::GET,
        &format!("/api/topics/{topic_id}"),
        None,
        &[],
    )
    .await;
    let (status, _, detail) = response_json(response).await;
    assert_status_ok_json(status, &detail);
    assert_eq!(detail["data"]["title"], "Fourier Transform");
    assert_eq!(detail["data"]["category"], "General");
    assert_eq!(detail["data"]["explanations"].as_array().unwrap().len(), 1);

    let missing = request(&app.app, Method::GET, "/api/topics/does-not-exist", None, &[]).await;
    let (status, _, body) = response_json(missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_json_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn it_untemplated_topic_repeats_hit_stored_explanation() {
    let app = spawn_test_app().await;

    let (status, first) = resolve(&app.app, "probability of rain").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["data"]["topic"]["title"], "probability of rain");
    assert_eq!(first["data"]["topic"]["category"], "General");

    let (status, second) = resolve(&app.app, "Probability of Rain").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["created"], false);
    assert_eq!(second["data"]["topic"]["searchCount"], 2);
    assert_eq!(app.state.store().count_topics().unwrap(), 1);
}
