mod common;

use axum::http::{Method, StatusCode};

use common::app::spawn_test_app;
use common::http::{request, response_json};

#[tokio::test]
async fn it_lists_seeded_achievements() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/achievements", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    let achievements = body["data"].as_array().expect("achievements array");
    assert_eq!(achievements.len(), 3);
    assert_eq!(achievements[0]["name"], "First Steps");
    assert_eq!(achievements[0]["requirement"]["type"], "lessons_completed");
    assert_eq!(achievements[2]["requirement"]["count"], 15);
}

#[tokio::test]
async fn it_unlocks_an_achievement_once() {
    let app = spawn_test_app();

    let unlock = serde_json::json!({"userId": 1, "achievementId": 1});
    let resp = request(&app.app, Method::POST, "/api/user-achievements", Some(unlock.clone())).await;
    let (status, _, first) = response_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    let unlocked_at = first["data"]["unlockedAt"].as_str().expect("unlockedAt").to_string();

    // Second unlock is a no-op returning the original record
    let resp = request(&app.app, Method::POST, "/api/user-achievements", Some(unlock)).await;
    let (status, _, second) = response_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["unlockedAt"], unlocked_at.as_str());

    let resp = request(&app.app, Method::GET, "/api/user-achievements/1", None).await;
    let (_, _, body) = response_json(resp).await;
    assert_eq!(body["data"].as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn it_returns_empty_array_for_user_without_unlocks() {
    let app = spawn_test_app();

    let resp = request(&app.app, Method::GET, "/api/user-achievements/5", None).await;
    let (status, _, body) = response_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 0);
}
