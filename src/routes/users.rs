use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::extractors::JsonBody;
use crate::passwords::hash_password;
use crate::response::{created, ok, AppError};
use crate::state::AppState;
use crate::store::operations::users::{NewUser, User};
use crate::validation::{is_valid_email, validate_password, validate_username};

/// Outward user view; the credential hash never leaves the store layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    id: u64,
    username: String,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for UserPublic {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            created_at: u.created_at,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/:id", get(get_user))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

async fn register_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let username = req.username.trim().to_string();
    let email = req.email.trim().to_string();

    validate_username(&username).map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;
    if !is_valid_email(&email) {
        return Err(AppError::bad_request("VALIDATION_ERROR", "invalid email"));
    }
    validate_password(&req.password)
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;

    let user = state.store().create_user(NewUser {
        username,
        email,
        password_hash: hash_password(&req.password)?,
    })?;

    Ok(created(UserPublic::from(&user)))
}

async fn get_user(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = state
        .store()
        .get_user(id)?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ok(UserPublic::from(&user)))
}
