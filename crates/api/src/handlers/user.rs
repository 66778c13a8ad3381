//! Handlers for the `/users` resource.
//!
//! Successful responses are wrapped in the `{message, data}` envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hydro_core::types::DbId;
use hydro_db::models::user::{CreateUser, UpdateUser, User};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Parse a user id path segment. Only plain ASCII digits are accepted, so
/// signs (`-1`, `+5`) and whitespace are rejected before `i64` parsing.
pub fn parse_user_id(raw: &str) -> AppResult<DbId> {
    let invalid = || AppError::BadRequest("Invalid user ID".into());
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<DbId>().map_err(|_| invalid())
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.users.get_all().await?;
    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        users,
    )))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let id = parse_user_id(&id)?;
    let user = state.users.get_by_id(id).await?;
    Ok(Json(ApiResponse::success("User retrieved successfully", user)))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state.users.create(&input).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

/// PUT /api/v1/users/{id}
///
/// Partial merge: omitted or empty fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<Json<ApiResponse<User>>> {
    let id = parse_user_id(&id)?;
    let user = state.users.update(id, &input).await?;
    Ok(Json(ApiResponse::success("User updated successfully", user)))
}

/// DELETE /api/v1/users/{id}
///
/// Returns 404 when the user does not exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_user_id(&id)?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
