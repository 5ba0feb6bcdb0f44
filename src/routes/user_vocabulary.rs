use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;

use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::store::operations::user_vocabulary::UserVocabularyUpdate;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upsert_user_vocabulary))
        .route("/:user_id", get(get_user_vocabulary))
}

async fn get_user_vocabulary(
    Path(user_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let records = state.store().get_user_vocabulary(user_id)?;
    Ok(ok(records))
}

async fn upsert_user_vocabulary(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<UserVocabularyUpdate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let record = state.store().upsert_user_vocabulary(update)?;
    Ok(ok(record))
}
