//! Route definitions for the focus-session log.
//!
//! ```text
//! POST /focus-sessions -> create_focus_session
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::focus_sessions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/focus-sessions",
        post(focus_sessions::create_focus_session),
    )
}
