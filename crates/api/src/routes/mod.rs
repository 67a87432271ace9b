pub mod auth;
pub mod focus_sessions;
pub mod health;
pub mod insights;
pub mod profile;
pub mod stats;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the server root -- the
/// boundary is consumed by an existing client with unversioned paths).
///
/// Route hierarchy:
///
/// ```text
/// /signup                      sign up (public)
/// /login                       log in (public)
/// /auth/password               update password (requires auth)
/// /auth/google                 browser OAuth URL (public)
/// /auth/google/native          native OAuth token exchange (public)
///
/// /profile                     get, update (requires auth)
///
/// /tasks                       list, create
/// /tasks/{id}                  update, delete
/// /tasks/{id}/status           set status (PATCH)
///
/// /focus-sessions              create
///
/// /dashboard-stats             dashboard view-model (GET)
/// /progress-stats              progress view-model (GET)
/// /profile-stats               profile aggregate (GET)
///
/// /get-insights                AI insights (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(profile::router())
        .merge(tasks::router())
        .merge(focus_sessions::router())
        .merge(stats::router())
        .merge(insights::router())
}
