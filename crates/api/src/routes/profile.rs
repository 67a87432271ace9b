//! Route definitions for the profile resource.
//!
//! ```text
//! GET /profile -> get_profile
//! PUT /profile -> update_profile
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(profile::get_profile).put(profile::update_profile),
    )
}
