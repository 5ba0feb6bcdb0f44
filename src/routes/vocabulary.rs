use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::response::{ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vocabulary))
        .route("/:id", get(get_vocabulary))
        .route("/category/:category", get(vocabulary_by_category))
}

async fn list_vocabulary(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let items = state.store().get_all_vocabulary()?;
    Ok(ok(items))
}

async fn get_vocabulary(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let item = state
        .store()
        .get_vocabulary(id)?
        .ok_or_else(|| AppError::not_found("Vocabulary not found"))?;
    Ok(ok(item))
}

async fn vocabulary_by_category(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let items = state.store().get_vocabulary_by_category(&category)?;
    Ok(ok(items))
}
