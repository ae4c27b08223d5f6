//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::UserPersistenceError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run every pending migration against `database_url`.
///
/// Diesel's migration harness is synchronous, so the work runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Connection failures map to [`UserPersistenceError::Connection`]; a failed
/// migration maps to [`UserPersistenceError::Query`].
pub async fn run_pending_migrations(database_url: &str) -> Result<(), UserPersistenceError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || migrate_blocking(&url))
        .await
        .map_err(|err| UserPersistenceError::query(format!("migration task: {err}")))?
}

fn migrate_blocking(url: &str) -> Result<(), UserPersistenceError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| UserPersistenceError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| UserPersistenceError::query(format!("migration: {err}")))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
