//! Application state for Axum web framework.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared state handed to every handler.
///
/// Cloning is cheap; services hold their repositories behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    /// Build the PostgreSQL-backed state from a connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self::from_repositories(Repositories::new(pool))
    }

    /// Build the state over any set of repositories.
    pub fn from_repositories(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
        }
    }
}
