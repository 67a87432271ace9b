//! Route definitions for the aggregate-stats endpoints.
//!
//! ```text
//! GET /dashboard-stats -> dashboard_stats
//! GET /progress-stats  -> progress_stats
//! GET /profile-stats   -> profile_stats
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard-stats", get(stats::dashboard_stats))
        .route("/progress-stats", get(stats::progress_stats))
        .route("/profile-stats", get(stats::profile_stats))
}
