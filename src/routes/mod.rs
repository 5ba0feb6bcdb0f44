pub mod achievements;
pub mod health;
pub mod lessons;
pub mod progress;
pub mod stats;
pub mod user_vocabulary;
pub mod users;
pub mod vocabulary;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::constants::MAX_BODY_SIZE;
use crate::middleware::request_id;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/users", users::router())
        .nest("/lessons", lessons::router())
        .nest("/vocabulary", vocabulary::router())
        .nest("/progress", progress::router())
        .nest("/user-vocabulary", user_vocabulary::router())
        .nest("/achievements", achievements::router())
        .nest("/user-achievements", achievements::user_router())
        .nest("/stats", stats::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    // Static file serving with SPA fallback for the frontend build
    let spa_fallback =
        ServeDir::new("static").not_found_service(ServeFile::new("static/index.html"));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::router())
        .fallback_service(spa_fallback)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}
