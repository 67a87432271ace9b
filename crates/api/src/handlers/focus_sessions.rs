//! Handlers for the `/focus-sessions` resource.
//!
//! Focus sessions are an append-only log: there is no update or delete
//! endpoint, only creation plus the aggregates consumed by the stats
//! handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use studypulse_core::error::CoreError;
use studypulse_db::models::focus_session::{CreateFocusSession, FocusSession};
use studypulse_db::repositories::FocusSessionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /focus-sessions
///
/// Record a finished focus session. The optional `task_id` is stored
/// as given -- it is a soft reference and may outlive the task.
pub async fn create_focus_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFocusSession>,
) -> AppResult<(StatusCode, Json<FocusSession>)> {
    let duration_minutes = match input.duration_minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Valid duration is required.".into(),
            )))
        }
    };

    let session =
        FocusSessionRepo::create(&state.pool, auth.user_id, duration_minutes, input.task_id)
            .await?;

    tracing::info!(
        session_id = session.id,
        duration_minutes,
        user_id = %auth.user_id,
        "Focus session recorded"
    );

    Ok((StatusCode::CREATED, Json(session)))
}
