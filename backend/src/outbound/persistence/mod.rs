//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here only translate between Diesel rows and domain types.
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to the module, and every database failure is mapped to
//! [`UserPersistenceError`](crate::domain::ports::UserPersistenceError).
//!
//! # Example
//!
//! ```ignore
//! use user_forms::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/user_forms")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
