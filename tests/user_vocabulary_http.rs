mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app;
use common::http::{request, response_json};

#[tokio::test]
async fn it_records_a_review_and_lists_it() {
    let app = spawn_test_app();

    let resp = request(
        &app.app,
        Method::POST,
        "/api/user-vocabulary",
        Some(serde_json::json!({
            "userId": 1,
            "vocabularyId": 1,
            "mastered": false,
            "correctCount": 1,
            "incorrectCount": 0
        })),
    )
    .await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["vocabularyId"], 1);
    assert_eq!(body["data"]["correctCount"], 1);
    assert!(body["data"]["lastReviewed"].is_string());

    let resp = request(&app.app, Method::GET, "/api/user-vocabulary/1", None).await;
    let (status, _, body) = response_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn it_merges_partial_updates_over_the_same_pair() {
    let app = spawn_test_app();

    request(
        &app.app,
        Method::POST,
        "/api/user-vocabulary",
        Some(serde_json::json!({
            "userId": 1,
            "vocabularyId": 2,
            "correctCount": 4,
            "incorrectCount": 2
        })),
    )
    .await;

    // Only flips mastered; counters must survive
    let resp = request(
        &app.app,
        Method::POST,
        "/api/user-vocabulary",
        Some(serde_json::json!({"userId": 1, "vocabularyId": 2, "mastered": true})),
    )
    .await;
    let (_, _, body) = response_json(resp).await;

    assert_eq!(body["data"]["mastered"], true);
    assert_eq!(body["data"]["correctCount"], 4);
    assert_eq!(body["data"]["incorrectCount"], 2);

    let resp = request(&app.app, Method::GET, "/api/user-vocabulary/1", None).await;
    let (_, _, body) = response_json(resp).await;
    assert_eq!(body["data"].as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn it_returns_empty_array_for_user_without_reviews() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/user-vocabulary/9", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 0);
}
