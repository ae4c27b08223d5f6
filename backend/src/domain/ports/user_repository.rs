//! Driven port for user persistence.
//!
//! Adapters store the three user fields plus timestamps and assign
//! ascending identifiers. They perform no validation: the domain service
//! only hands them normalised, valid field sets.

use async_trait::async_trait;

use crate::domain::{User, UserFields, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Storage contract for user records.
///
/// Concurrent updates to one record are last-write-wins; adapters do not
/// version rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by identifier ascending.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch one user, `None` when the identifier is unknown.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new user and return it with its assigned identifier.
    async fn insert(&self, fields: &UserFields) -> Result<User, UserPersistenceError>;

    /// Replace the fields of an existing user.
    ///
    /// Returns `None` when no row matched `id`.
    async fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> Result<Option<User>, UserPersistenceError>;
}
