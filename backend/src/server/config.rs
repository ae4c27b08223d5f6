//! HTTP server configuration object.

use std::net::SocketAddr;

use user_forms::domain::LanguagePolicy;
use user_forms::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) language_policy: LanguagePolicy,
}

impl ServerConfig {
    /// In-memory store and the open language policy until told otherwise.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            language_policy: LanguagePolicy::default(),
        }
    }

    /// Persist users in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Validation policy for the `language` field.
    #[must_use]
    pub fn with_language_policy(mut self, policy: LanguagePolicy) -> Self {
        self.language_policy = policy;
        self
    }
}
