//! Outbound adapters implementing the user repository port.
//!
//! - **persistence**: PostgreSQL via Diesel
//! - **memory**: process-local store used when no database is configured

pub mod memory;
pub mod persistence;
