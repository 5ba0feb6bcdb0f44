mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app;
use common::http::{assert_json_error, request, response_json};

#[tokio::test]
async fn it_lists_all_seeded_lessons() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let lessons = body["data"].as_array().expect("lessons array");
    assert_eq!(lessons.len(), 3);
    assert_eq!(lessons[0]["title"], "The English Alphabet");
    assert_eq!(lessons[0]["titleKu"], "پیتێن ئینگلیزی");
}

#[tokio::test]
async fn it_gets_a_lesson_by_id() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons/2", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Basic Greetings");
    assert_eq!(body["data"]["category"], "conversation");
    assert_eq!(body["data"]["content"]["type"], "greetings");
}

#[tokio::test]
async fn it_returns_404_for_unknown_lesson_id() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons/999", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_json_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn it_filters_lessons_by_level() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons/level/beginner", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    let lessons = body["data"].as_array().expect("lessons array");
    assert_eq!(lessons.len(), 2);
    assert!(lessons.iter().all(|l| l["level"] == "beginner"));
}

#[tokio::test]
async fn it_returns_empty_array_for_unknown_level() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons/level/expert", None).await;
    let (status, _, body) = response_json(resp).await;

    // Empty success result, not an error: distinguishable from 404
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn it_rejects_non_numeric_lesson_id() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/lessons/abc", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["traceId"].is_string());
}
