//! Repository for the `users` table.

use std::time::Duration;

use async_trait::async_trait;
use hydro_core::error::CoreError;
use hydro_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::store::{bounded, StoreError, StoreResult, UserStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// PostgreSQL-backed [`UserStore`].
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
    query_timeout: Duration,
}

impl UserRepo {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn insert(&self, input: &CreateUser) -> StoreResult<User> {
        let query = format!(
            "INSERT INTO users (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::from(CoreError::not_found("User", id)))
    }

    /// Read-merge-write inside one transaction.
    ///
    /// The current row is locked with `FOR UPDATE`, so concurrent partial
    /// updates of the same user serialize instead of losing writes.
    async fn merge(&self, id: DbId, input: &UpdateUser) -> StoreResult<User> {
        let select = format!("SELECT {COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        let update = format!(
            "UPDATE users SET name = $1, email = $2, updated_at = CURRENT_TIMESTAMP
             WHERE id = $3
             RETURNING {COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, User>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id))?;

        let (name, email) = input.merge_onto(&current);

        let updated = sqlx::query_as::<_, User>(&update)
            .bind(&name)
            .bind(&email)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id))?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Hard-delete a user. Zero affected rows is reported as `NotFound`.
    async fn hard_delete(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::from(CoreError::not_found("User", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn create(&self, input: &CreateUser) -> StoreResult<User> {
        bounded(self.query_timeout, self.insert(input)).await
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        bounded(self.query_timeout, self.list()).await
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<User> {
        bounded(self.query_timeout, self.find_by_id(id)).await
    }

    async fn update(&self, id: DbId, input: &UpdateUser) -> StoreResult<User> {
        bounded(self.query_timeout, self.merge(id, input)).await
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        bounded(self.query_timeout, self.hard_delete(id)).await
    }
}
