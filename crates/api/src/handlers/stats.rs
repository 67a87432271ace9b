//! Handlers for the three aggregate-stats endpoints.
//!
//! Each handler gathers its raw inputs in a fixed order (the first
//! failing lookup wins -- there is no retry or partial result) and then
//! hands everything to the pure derivation functions in
//! `studypulse_core::stats`.

use axum::extract::State;
use axum::Json;
use studypulse_core::stats::{self, DashboardStats, ProfileStats, ProgressStats};
use studypulse_db::repositories::{FocusSessionRepo, ProfileRepo, StatsRepo, TaskRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How many nearest-deadline tasks the dashboard shows.
const UPCOMING_TASK_LIMIT: i64 = 2;

/// GET /dashboard-stats
pub async fn dashboard_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardStats>> {
    let today = chrono::Utc::now().date_naive();

    let tasks_due_today = TaskRepo::count_due_on(&state.pool, auth.user_id, today).await?;
    let upcoming_tasks = TaskRepo::upcoming(&state.pool, auth.user_id, UPCOMING_TASK_LIMIT).await?;
    let weekly_focus = StatsRepo::weekly_focus_hours(&state.pool, auth.user_id).await?;
    let streak = StatsRepo::streak(&state.pool, auth.user_id).await?;
    let daily_goal = ProfileRepo::daily_goal_minutes(&state.pool, auth.user_id).await?;

    Ok(Json(stats::dashboard_stats(
        Some(tasks_due_today),
        Some(upcoming_tasks),
        Some(weekly_focus),
        Some(streak),
        daily_goal,
    )))
}

/// GET /progress-stats
pub async fn progress_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProgressStats>> {
    let weekly_focus = StatsRepo::weekly_focus_hours(&state.pool, auth.user_id).await?;
    let tasks_completed =
        StatsRepo::tasks_completed_last_7_days(&state.pool, auth.user_id).await?;
    let streak = StatsRepo::streak(&state.pool, auth.user_id).await?;
    let completed_count = TaskRepo::count_completed(&state.pool, auth.user_id).await?;
    let durations = FocusSessionRepo::durations(&state.pool, auth.user_id).await?;

    Ok(Json(stats::progress_stats(
        Some(weekly_focus),
        Some(tasks_completed),
        Some(streak),
        Some(completed_count),
        &durations,
    )))
}

/// GET /profile-stats
pub async fn profile_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileStats>> {
    let total_tasks = TaskRepo::count_all(&state.pool, auth.user_id).await?;
    let completed_tasks = TaskRepo::count_completed(&state.pool, auth.user_id).await?;
    let durations = FocusSessionRepo::durations(&state.pool, auth.user_id).await?;

    Ok(Json(stats::profile_stats(
        total_tasks,
        completed_tasks,
        &durations,
    )))
}
