//! Handlers for the `/tanks` resource.
//!
//! Successful responses carry the bare entity or array; errors use the
//! shared `{"error": ...}` envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hydro_core::types::TankId;
use hydro_db::models::tank::{CreateTank, Tank, UpdateTank};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Parse a tank id path segment.
pub fn parse_tank_id(raw: &str) -> AppResult<TankId> {
    TankId::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid UUID format".into()))
}

/// POST /api/v1/tanks
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTank>,
) -> AppResult<(StatusCode, Json<Tank>)> {
    let tank = state.tanks.create(&input).await?;
    tracing::info!(tank_id = %tank.id, "Tank created");
    Ok((StatusCode::CREATED, Json(tank)))
}

/// GET /api/v1/tanks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tank>>> {
    let tanks = state.tanks.get_all().await?;
    Ok(Json(tanks))
}

/// GET /api/v1/tanks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tank>> {
    let id = parse_tank_id(&id)?;
    let tank = state.tanks.get_by_id(id).await?;
    Ok(Json(tank))
}

/// PUT /api/v1/tanks/{id}
///
/// Full replacement: every required field must be present in the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTank>,
) -> AppResult<Json<Tank>> {
    let id = parse_tank_id(&id)?;
    let tank = state.tanks.update(id, &input).await?;
    Ok(Json(tank))
}

/// DELETE /api/v1/tanks/{id}
///
/// Returns 204 whether or not the tank existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_tank_id(&id)?;
    state.tanks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
