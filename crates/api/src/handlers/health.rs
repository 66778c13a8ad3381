//! Handler for `GET /health`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `"ok"` while the database answers and `"degraded"` otherwise.
/// The endpoint itself always answers 200 so liveness checks keep passing
/// while the pool reconnects.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub db_healthy: bool,
    pub version: &'static str,
}

impl HealthStatus {
    pub fn from_db_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            db_healthy,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /health
pub async fn check(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = match hydro_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };
    Json(HealthStatus::from_db_check(db_healthy))
}
