use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::store::operations::lessons::{Lesson, LessonLevel};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lessons))
        .route("/:id", get(get_lesson))
        .route("/level/:level", get(lessons_by_level))
}

async fn list_lessons(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let lessons = state.store().get_all_lessons()?;
    Ok(ok(lessons))
}

async fn get_lesson(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let lesson = state
        .store()
        .get_lesson(id)?
        .ok_or_else(|| AppError::not_found("Lesson not found"))?;
    Ok(ok(lesson))
}

async fn lessons_by_level(
    Path(level): Path<String>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    // An unknown level is an empty result, not an error
    let lessons: Vec<Lesson> = match level.parse::<LessonLevel>() {
        Ok(level) => state.store().get_lessons_by_level(level)?,
        Err(()) => Vec::new(),
    };
    Ok(ok(lessons))
}
