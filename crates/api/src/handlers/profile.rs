//! Handlers for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use studypulse_core::error::CoreError;
use studypulse_db::models::profile::{Profile, UpdateProfile};
use studypulse_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Profile row plus the email held by the identity provider.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub email: String,
}

/// GET /profile
///
/// The profile row is created lazily with defaults when the provider-side
/// trigger has not created one (e.g. first OAuth sign-in).
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = ProfileRepo::ensure(&state.pool, auth.user_id).await?;

    Ok(Json(ProfileResponse {
        profile,
        email: auth.email,
    }))
}

/// PUT /profile
///
/// Overwrite the editable profile fields.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    if input.first_name.as_deref().is_none_or(str::is_empty) {
        return Err(AppError::Core(CoreError::Validation(
            "First name is required.".into(),
        )));
    }
    if input.daily_goal_minutes.is_some_and(|goal| goal < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Daily goal must not be negative.".into(),
        )));
    }

    let profile = ProfileRepo::update(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = %auth.user_id, "Profile updated");

    Ok(Json(profile))
}
