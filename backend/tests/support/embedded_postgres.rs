//! Embedded PostgreSQL databases migrated with the crate's own migrations.
//!
//! Each test gets a fresh temporary database on the shared cluster. The
//! schema comes from `run_pending_migrations`, so a drift between the
//! migration and `schema.rs` shows up as a failing query.

use diesel::prelude::*;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use tokio::runtime::Runtime;
use user_forms::outbound::persistence::run_pending_migrations;

/// Create a temporary database and apply every migration to it.
pub fn provision_migrated_database(runtime: &Runtime) -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let database = cluster
        .create_temporary_database()
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    let url = database.url().to_string();
    runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| format!("migrate {url}: {err}"))?;
    Ok(database)
}

/// Drop the `users` table to simulate schema loss.
pub fn drop_users_table(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| err.to_string())?;
    diesel::sql_query("DROP TABLE IF EXISTS users")
        .execute(&mut conn)
        .map_err(|err| err.to_string())?;
    Ok(())
}
