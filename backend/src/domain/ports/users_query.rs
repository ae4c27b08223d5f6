//! Driving port for reading users.
//!
//! Inbound adapters use this port to render the list view and serve the
//! edit form's XHR lookup without touching persistence types.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users ordered by identifier ascending.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user; fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn fetch_user(&self, id: UserId) -> Result<User, Error>;
}
