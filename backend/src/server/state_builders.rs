//! Builders for the HTTP state shared by every worker.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use admin_backend::domain::UsersService;
use admin_backend::inbound::http::state::HttpState;
use admin_backend::outbound::memory::InMemoryUserRepository;
use admin_backend::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Wire the users service onto the configured repository.
///
/// Uses PostgreSQL when a pool is configured, otherwise an in-memory store
/// that is lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            let repo = Arc::new(DieselUserRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(UsersService::new(repo)))
        }
        None => {
            warn!("no database configured; users are kept in memory");
            let repo = Arc::new(InMemoryUserRepository::new());
            HttpState::from_service(Arc::new(UsersService::new(repo)))
        }
    };
    web::Data::new(state)
}
