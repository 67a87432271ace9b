//! Handlers for the authentication endpoints.
//!
//! All credential handling is delegated to the hosted identity provider;
//! these handlers validate required fields, forward the call, and shape
//! the response. Google sign-in has two explicitly-typed entry points:
//! the browser flow (`GET /auth/google`, returns a redirect URL) and the
//! native flow (`POST /auth/google/native`, exchanges an ID token).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use studypulse_core::error::CoreError;
use studypulse_db::repositories::ProfileRepo;
use studypulse_identity::{Session, SignUp};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum accepted password length for in-app password updates.
const MIN_PASSWORD_CHARS: usize = 6;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `PUT /auth/password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateRequest {
    pub new_password: Option<String>,
}

/// Request body for `POST /auth/google/native`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleNativeRequest {
    pub id_token: Option<String>,
}

/// Session envelope returned by login and the native Google flow.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Session,
}

/// Response for `GET /auth/google`: where to send the browser.
#[derive(Debug, Serialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Register with the identity provider, then record the given names on
/// the user's profile row. A profile write failure is logged but does not
/// fail the sign-up -- the account already exists at that point.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignUp>)> {
    let email = require_field(input.email.as_deref(), "Email is required.")?;
    let password = require_field(input.password.as_deref(), "Password is required.")?;

    let signup = state.identity.sign_up(email, password).await?;

    let Some(user) = signup.user.clone() else {
        return Err(AppError::InternalError("User not created".into()));
    };

    if let Err(err) = ProfileRepo::upsert_names(
        &state.pool,
        user.id,
        input.first_name.as_deref(),
        input.last_name.as_deref(),
    )
    .await
    {
        tracing::warn!(error = %err, user_id = %user.id, "Profile update after signup failed");
    }

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((StatusCode::CREATED, Json(signup)))
}

/// POST /login
///
/// Exchange email/password credentials for a session.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let email = require_field(input.email.as_deref(), "Email is required.")?;
    let password = require_field(input.password.as_deref(), "Password is required.")?;

    let session = state.identity.sign_in_with_password(email, password).await?;

    Ok(Json(SessionResponse { session }))
}

/// PUT /auth/password
///
/// Change the authenticated user's password. Provider failures surface
/// as 500 with the upstream message.
pub async fn update_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PasswordUpdateRequest>,
) -> AppResult<Json<MessageResponse>> {
    let password = input.new_password.as_deref().unwrap_or("");
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Core(CoreError::Validation(
            "New password must be at least 6 characters long.".into(),
        )));
    }

    state
        .identity
        .update_password(&auth.token, password)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(user_id = %auth.user_id, "Password updated");

    Ok(Json(MessageResponse {
        message: "Password updated successfully.",
    }))
}

/// GET /auth/google
///
/// Browser OAuth flow: return the provider URL to redirect the user to.
pub async fn google_auth_url(State(state): State<AppState>) -> AppResult<Json<AuthUrlResponse>> {
    let url = state
        .identity
        .authorize_url("google", &state.config.identity.google_redirect_url);

    Ok(Json(AuthUrlResponse { url }))
}

/// POST /auth/google/native
///
/// Native OAuth flow: exchange the platform sign-in ID token for a session.
pub async fn google_native(
    State(state): State<AppState>,
    Json(input): Json<GoogleNativeRequest>,
) -> AppResult<Json<SessionResponse>> {
    let id_token = require_field(input.id_token.as_deref(), "idToken is required.")?;

    let session = state.identity.sign_in_with_id_token("google", id_token).await?;

    Ok(Json(SessionResponse { session }))
}

/// Reject absent or empty required fields with the field-specific message.
fn require_field<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(message.into()))),
    }
}
