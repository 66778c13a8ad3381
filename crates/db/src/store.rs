//! Store capability traits.
//!
//! Handlers depend on these traits only; the PostgreSQL implementations live
//! in [`crate::repositories`] and are injected at composition time. Each
//! family keeps its own update and delete semantics, documented per method.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use hydro_core::error::CoreError;
use hydro_core::types::{DbId, TankId};

use crate::models::tank::{CreateTank, Tank, UpdateTank};
use crate::models::user::{CreateUser, UpdateUser, User};

/// Failures returned by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain error, e.g. [`CoreError::NotFound`].
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any database failure: connectivity, constraint violation, decoding.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The call did not finish within the configured query timeout.
    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}

impl StoreError {
    /// Whether this error means the target row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::NotFound { .. }))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for the tank family.
#[async_trait]
pub trait TankStore: Send + Sync {
    /// Insert a tank and return it with its generated id and timestamps.
    async fn create(&self, input: &CreateTank) -> StoreResult<Tank>;

    /// All tanks, most recently created first.
    async fn get_all(&self) -> StoreResult<Vec<Tank>>;

    async fn get_by_id(&self, id: TankId) -> StoreResult<Tank>;

    /// Replace every field of a tank. Fails with `NotFound` if the id is unknown.
    async fn update(&self, id: TankId, input: &UpdateTank) -> StoreResult<Tank>;

    /// Delete a tank. Deleting an unknown id succeeds.
    async fn delete(&self, id: TankId) -> StoreResult<()>;
}

/// Persistence for the user family.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and return it with its generated id and timestamps.
    async fn create(&self, input: &CreateUser) -> StoreResult<User>;

    /// All users ordered by id ascending.
    async fn get_all(&self) -> StoreResult<Vec<User>>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<User>;

    /// Merge present fields onto the stored user. Fails with `NotFound` if
    /// the id is unknown.
    async fn update(&self, id: DbId, input: &UpdateUser) -> StoreResult<User>;

    /// Delete a user. Fails with `NotFound` if no row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<()>;
}

/// Run a store future under `limit`, mapping expiry to [`StoreError::Timeout`].
pub(crate) async fn bounded<T, F>(limit: Duration, fut: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
}
