//! One learner's journey end to end: register, browse content, complete a
//! lesson, review vocabulary, unlock an achievement, check the dashboard.

mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app;
use common::http::{request, response_json};

#[tokio::test]
async fn it_supports_a_full_learning_session() {
    let app = spawn_test_app();

    // Register
    let resp = request(
        &app.app,
        Method::POST,
        "/api/users",
        Some(serde_json::json!({
            "username": "azad",
            "email": "azad@example.com",
            "password": "Passw0rd!"
        })),
    )
    .await;
    let (status, _, body) = response_json(resp).await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["data"]["id"].as_u64().expect("user id");

    // Browse beginner lessons and pick the first
    let resp = request(&app.app, Method::GET, "/api/lessons/level/beginner", None).await;
    let (_, _, body) = response_json(resp).await;
    let lesson_id = body["data"][0]["id"].as_u64().expect("lesson id");

    // Complete it
    let resp = request(
        &app.app,
        Method::POST,
        "/api/progress",
        Some(serde_json::json!({
            "userId": user_id,
            "lessonId": lesson_id,
            "completed": true,
            "score": 88
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Review a flashcard correctly
    let resp = request(
        &app.app,
        Method::POST,
        "/api/user-vocabulary",
        Some(serde_json::json!({
            "userId": user_id,
            "vocabularyId": 1,
            "mastered": true,
            "correctCount": 1
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // First lesson done: unlock "First Steps"
    let resp = request(
        &app.app,
        Method::POST,
        "/api/user-achievements",
        Some(serde_json::json!({"userId": user_id, "achievementId": 1})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The dashboard reflects all of it
    let resp = request(&app.app, Method::GET, &format!("/api/stats/{user_id}"), None).await;
    let (status, _, body) = response_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["completedLessons"], 1);
    assert_eq!(body["data"]["totalVocabulary"], 1);
    assert_eq!(body["data"]["masteredVocabulary"], 1);
    assert_eq!(body["data"]["totalAchievements"], 1);
    assert_eq!(body["data"]["averageScore"], 88);
    assert_eq!(body["data"]["streakDays"], 1);
}
