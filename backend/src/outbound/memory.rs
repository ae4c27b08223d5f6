//! Process-local user store.
//!
//! Used when no database URL is configured and by the behaviour tests.
//! Records live only as long as the process.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserFields, UserId};

#[derive(Debug)]
struct State {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// Identifiers start at 1 and are never reused.
pub struct InMemoryUserRepository {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty store reading wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty store with an explicit clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock()?;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock()?;
        Ok(state.users.get(&id).cloned())
    }

    async fn insert(&self, fields: &UserFields) -> Result<User, UserPersistenceError> {
        let now = self.clock.utc();
        let mut state = self.lock()?;
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        let user = User::new(id, fields.clone(), now, now);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> Result<Option<User>, UserPersistenceError> {
        let now = self.clock.utc();
        let mut state = self.lock()?;
        let Some(existing) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        *existing = User::new(id, fields.clone(), existing.created_at(), now);
        Ok(Some(existing.clone()))
    }
}
