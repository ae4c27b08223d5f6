//! Builders wiring the user repository into the HTTP state.

use std::sync::Arc;

use tracing::warn;
use user_forms::domain::UserFormService;
use user_forms::domain::ports::UserRepository;
use user_forms::inbound::http::state::HttpState;
use user_forms::outbound::memory::InMemoryUserRepository;
use user_forms::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

fn build_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// One service instance backs both driving ports.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let service = Arc::new(
        UserFormService::new(build_repository(config))
            .with_language_policy(config.language_policy),
    );
    HttpState::new(service.clone(), service)
}
