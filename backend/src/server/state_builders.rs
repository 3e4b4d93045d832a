//! Storage Gateway selection for the HTTP state.

use std::sync::Arc;

use tracing::{info, warn};

use postbox::inbound::http::state::HttpState;
use postbox::outbound::memory::InMemoryStore;
use postbox::outbound::persistence::{DieselMessageRepository, DieselUserRepository};

use super::ServerConfig;

/// PostgreSQL repositories when a pool is configured, otherwise one shared
/// in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL storage");
            HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselMessageRepository::new(pool.clone())),
            )
        }
        None => {
            warn!("no database configured; data is kept in memory and lost on restart");
            let store = Arc::new(InMemoryStore::new());
            HttpState::from_repositories(Arc::clone(&store), store)
        }
    }
}
