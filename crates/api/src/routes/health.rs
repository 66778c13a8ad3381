//! Root-level operational routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Routes merged at the root, outside `/api/v1`.
///
/// ```text
/// GET /health    -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::check))
}
