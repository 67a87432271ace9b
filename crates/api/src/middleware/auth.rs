//! Bearer-token authentication extractor.
//!
//! Token verification is delegated to the identity provider: every
//! protected request costs one `get_user` call, and an invalid token
//! short-circuits before any store access.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use studypulse_core::error::CoreError;
use studypulse_core::types::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the `Authorization: Bearer` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The provider's id for this user.
    pub user_id: UserId,
    /// The user's email as recorded by the provider.
    pub email: String,
    /// The raw bearer token, kept for provider calls made on the
    /// caller's behalf (e.g. password update).
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("No token provided".into())))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("No token provided".into())))?;

        let user = state
            .identity
            .get_user(token)
            .await
            .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid token".into())))?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            token: token.to_string(),
        })
    }
}
