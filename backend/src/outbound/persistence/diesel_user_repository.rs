//! PostgreSQL-backed `UserRepository` using Diesel.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserFields, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChanges, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the [`UserRepository`] port.
///
/// Timestamps come from the injected clock rather than column defaults so
/// the in-memory adapter and this one stamp records the same way.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselUserRepository {
    /// Create a repository reading wall-clock time.
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Create a repository with an explicit clock.
    pub fn with_clock(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn insert(&self, fields: &UserFields) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::new(fields, self.clock.utc()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(User::from(row))
    }

    async fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = diesel::update(users::table.find(id.get()))
            .set(UserChanges::new(fields, self.clock.utc()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }
}
