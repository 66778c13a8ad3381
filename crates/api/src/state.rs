use std::sync::Arc;

use hydro_db::store::{TankStore, UserStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Stores are trait objects so the binary can inject the PostgreSQL
/// repositories and tests can inject in-memory doubles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: hydro_db::DbPool,
    /// Tank persistence.
    pub tanks: Arc<dyn TankStore>,
    /// User persistence.
    pub users: Arc<dyn UserStore>,
}
