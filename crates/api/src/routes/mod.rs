pub mod health;
pub mod tank;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tanks                list, create
/// /tanks/{id}           get, update (full replace), delete (idempotent)
///
/// /users                list, create
/// /users/{id}           get, update (merge), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tanks", tank::router())
        .nest("/users", user::router())
}
