//! Shared helpers for integration tests that need PostgreSQL.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{drop_users_table, provision_migrated_database};
