//! Route definitions for the AI insights endpoint.
//!
//! ```text
//! POST /get-insights -> get_insights
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/get-insights", post(insights::get_insights))
}
