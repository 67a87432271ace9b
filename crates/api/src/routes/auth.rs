//! Route definitions for authentication.
//!
//! ```text
//! POST /signup               -> signup
//! POST /login                -> login
//! PUT  /auth/password        -> update_password
//! GET  /auth/google          -> google_auth_url (browser flow)
//! POST /auth/google/native   -> google_native (native flow)
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/auth/password", put(auth::update_password))
        .route("/auth/google", get(auth::google_auth_url))
        .route("/auth/google/native", post(auth::google_native))
}
