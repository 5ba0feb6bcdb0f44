use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::response::{ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_stats))
}

async fn get_stats(
    Path(user_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let stats = state.store().compute_user_stats(user_id)?;
    Ok(ok(stats))
}
