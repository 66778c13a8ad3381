//! Route definitions for the `/tanks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tank;
use crate::state::AppState;

/// Routes mounted at `/tanks`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tank::list).post(tank::create))
        .route(
            "/{id}",
            get(tank::get_by_id).put(tank::update).delete(tank::delete),
        )
}
