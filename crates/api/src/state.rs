use std::sync::Arc;

use studypulse_identity::IdentityProvider;
use studypulse_insights::InsightsBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc` or is a pool handle);
/// the server itself keeps no other state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (hosted relational store).
    pub pool: studypulse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted identity provider.
    pub identity: Arc<dyn IdentityProvider>,
    /// Generative backend for the insights feature.
    pub insights: Arc<dyn InsightsBackend>,
}
