//! Repository for the `tanks` table.

use std::time::Duration;

use async_trait::async_trait;
use hydro_core::error::CoreError;
use hydro_core::types::TankId;
use sqlx::PgPool;

use crate::models::tank::{CreateTank, Tank, UpdateTank};
use crate::store::{bounded, StoreError, StoreResult, TankStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, room, rack_location, volume_liters, inventory_number, \
                       water, notes, created_at, updated_at";

/// PostgreSQL-backed [`TankStore`].
///
/// The SQL lives in the inherent methods; the trait impl wraps each one in
/// the configured query timeout.
#[derive(Clone)]
pub struct TankRepo {
    pool: PgPool,
    query_timeout: Duration,
}

impl TankRepo {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Insert a new tank, returning the created row.
    async fn insert(&self, input: &CreateTank) -> StoreResult<Tank> {
        let query = format!(
            "INSERT INTO tanks (name, room, rack_location, volume_liters, inventory_number, water, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let tank = sqlx::query_as::<_, Tank>(&query)
            .bind(&input.name)
            .bind(&input.room)
            .bind(&input.rack_location)
            .bind(input.volume_liters)
            .bind(&input.inventory_number)
            .bind(&input.water)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(tank)
    }

    /// List all tanks ordered by most recently created first.
    async fn list(&self) -> StoreResult<Vec<Tank>> {
        let query = format!("SELECT {COLUMNS} FROM tanks ORDER BY created_at DESC");
        let tanks = sqlx::query_as::<_, Tank>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(tanks)
    }

    async fn find_by_id(&self, id: TankId) -> StoreResult<Tank> {
        let query = format!("SELECT {COLUMNS} FROM tanks WHERE id = $1");
        sqlx::query_as::<_, Tank>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::from(CoreError::not_found("Tank", id)))
    }

    /// Overwrite every column in a single `UPDATE ... RETURNING`.
    ///
    /// An empty `RETURNING` result means the id is unknown.
    async fn replace(&self, id: TankId, input: &UpdateTank) -> StoreResult<Tank> {
        let query = format!(
            "UPDATE tanks SET
                name = $1,
                room = $2,
                rack_location = $3,
                volume_liters = $4,
                inventory_number = $5,
                water = $6,
                notes = $7,
                updated_at = NOW()
             WHERE id = $8
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tank>(&query)
            .bind(&input.name)
            .bind(&input.room)
            .bind(&input.rack_location)
            .bind(input.volume_liters)
            .bind(&input.inventory_number)
            .bind(&input.water)
            .bind(&input.notes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::from(CoreError::not_found("Tank", id)))
    }

    /// Hard-delete a tank. A missing row is not an error.
    async fn hard_delete(&self, id: TankId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tanks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(%id, "Tank delete matched no rows");
        }
        Ok(())
    }
}

#[async_trait]
impl TankStore for TankRepo {
    async fn create(&self, input: &CreateTank) -> StoreResult<Tank> {
        bounded(self.query_timeout, self.insert(input)).await
    }

    async fn get_all(&self) -> StoreResult<Vec<Tank>> {
        bounded(self.query_timeout, self.list()).await
    }

    async fn get_by_id(&self, id: TankId) -> StoreResult<Tank> {
        bounded(self.query_timeout, self.find_by_id(id)).await
    }

    async fn update(&self, id: TankId, input: &UpdateTank) -> StoreResult<Tank> {
        bounded(self.query_timeout, self.replace(id, input)).await
    }

    async fn delete(&self, id: TankId) -> StoreResult<()> {
        bounded(self.query_timeout, self.hard_delete(id)).await
    }
}
