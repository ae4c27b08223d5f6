//! Driving port for the create and update form submissions.

use async_trait::async_trait;

use crate::domain::{Error, User, UserFields, UserId, ValidationErrors};

/// Result of a create or update that reached validation.
///
/// Rejection is an ordinary outcome rather than an [`Error`]: the caller
/// shows the messages and lets the person correct the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record passed validation and was written.
    Saved(User),
    /// At least one rule failed; nothing was written.
    Rejected(ValidationErrors),
}

/// Write-side use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserFormCommand: Send + Sync {
    /// Normalise, validate and insert a new user.
    async fn create_user(&self, fields: UserFields) -> Result<SaveOutcome, Error>;

    /// Replace the fields of user `id`, then normalise, validate and save.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update_user(&self, id: UserId, fields: UserFields) -> Result<SaveOutcome, Error>;
}
