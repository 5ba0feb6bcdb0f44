use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;

/// `/api/achievements` — the reference catalogue.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_achievements))
}

/// `/api/user-achievements` — per-user unlocks.
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(unlock_achievement))
        .route("/:user_id", get(get_user_achievements))
}

async fn list_achievements(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let achievements = state.store().get_all_achievements()?;
    Ok(ok(achievements))
}

async fn get_user_achievements(
    Path(user_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let unlocks = state.store().get_user_achievements(user_id)?;
    Ok(ok(unlocks))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnlockRequest {
    user_id: u64,
    achievement_id: u64,
}

async fn unlock_achievement(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UnlockRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    // Re-unlocking returns the existing record unchanged
    let record = state
        .store()
        .unlock_achievement(req.user_id, req.achievement_id)?;
    Ok(ok(record))
}
