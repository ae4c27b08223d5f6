//! User form service implementing the driving ports.
//!
//! Every save follows the same order: build the candidate, normalise it,
//! validate it, and only then write. A rejected candidate never reaches the
//! repository, so a failed update leaves the stored record as it was.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    SaveOutcome, UserFormCommand, UserPersistenceError, UserRepository, UsersQuery,
};
use crate::domain::{Error, LanguagePolicy, User, UserFields, UserId, validate};

/// Domain service backing list, fetch, create and update.
#[derive(Clone)]
pub struct UserFormService<R: ?Sized> {
    repository: Arc<R>,
    policy: LanguagePolicy,
}

impl<R: ?Sized> UserFormService<R> {
    /// Create a service with the default open language policy.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            policy: LanguagePolicy::default(),
        }
    }

    /// Use `policy` when validating `language`.
    #[must_use]
    pub fn with_language_policy(mut self, policy: LanguagePolicy) -> Self {
        self.policy = policy;
        self
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

impl<R> UserFormService<R>
where
    R: UserRepository + ?Sized,
{
    /// Normalise and validate `fields`, handing the survivors to `write`.
    async fn save_with<F, Fut>(&self, fields: UserFields, write: F) -> Result<SaveOutcome, Error>
    where
        F: FnOnce(UserFields) -> Fut,
        Fut: std::future::Future<Output = Result<User, Error>>,
    {
        let candidate = fields.normalized();
        let errors = validate(&candidate, self.policy);
        if !errors.is_empty() {
            let rejected: Vec<_> = errors.fields().map(|field| field.as_str()).collect();
            debug!(fields = ?rejected, "user form rejected");
            return Ok(SaveOutcome::Rejected(errors));
        }
        write(candidate).await.map(SaveOutcome::Saved)
    }
}

#[async_trait]
impl<R> UsersQuery for UserFormService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UserFormCommand for UserFormService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, fields: UserFields) -> Result<SaveOutcome, Error> {
        self.save_with(fields, |candidate| async move {
            let user = self
                .repository
                .insert(&candidate)
                .await
                .map_err(map_persistence_error)?;
            info!(user_id = %user.id(), "user created");
            Ok(user)
        })
        .await
    }

    async fn update_user(&self, id: UserId, fields: UserFields) -> Result<SaveOutcome, Error> {
        // Only the existence check needs the stored record: the submission
        // replaces all three fields.
        self.fetch_user(id).await?;
        self.save_with(fields, |candidate| async move {
            let user = self
                .repository
                .update(id, &candidate)
                .await
                .map_err(map_persistence_error)?
                .ok_or_else(|| user_not_found(id))?;
            info!(user_id = %id, "user updated");
            Ok(user)
        })
        .await
    }
}

#[cfg(test)]
#[path = "user_form_service_tests.rs"]
mod tests;
