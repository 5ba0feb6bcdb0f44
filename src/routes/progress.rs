use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;

use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::store::operations::progress::ProgressUpdate;
use crate::validation::validate_score;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upsert_progress))
        .route("/:user_id", get(get_progress))
}

async fn get_progress(
    Path(user_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let progress = state.store().get_user_progress(user_id)?;
    Ok(ok(progress))
}

async fn upsert_progress(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<ProgressUpdate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if let Some(score) = update.score {
        validate_score(score).map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;
    }

    let record = state.store().upsert_user_progress(update)?;
    Ok(ok(record))
}
