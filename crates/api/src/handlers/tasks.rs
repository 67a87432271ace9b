//! Handlers for the `/tasks` resource.
//!
//! Every lookup is scoped by the authenticated user's id. A mutation that
//! matches no row answers 404 whether the id was wrong or the task
//! belongs to someone else -- the two cases are deliberately conflated.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use studypulse_core::error::CoreError;
use studypulse_core::task::{TaskPriority, TaskStatus};
use studypulse_core::types::DbId;
use studypulse_db::models::task::{CreateTask, Task, TaskListParams, UpdateTask, UpdateTaskStatus};
use studypulse_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /tasks
///
/// List the caller's tasks, newest first, optionally filtered by status.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let status = params
        .status
        .as_deref()
        .map(|s| s.parse::<TaskStatus>())
        .transpose()?;

    let tasks = TaskRepo::list(&state.pool, auth.user_id, status).await?;

    Ok(Json(tasks))
}

/// POST /tasks
///
/// Create a task; its status always starts at `Pending`.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let name = match input.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Task name is required.".into(),
            )))
        }
    };

    let priority = input
        .priority
        .as_deref()
        .map(|p| p.parse::<TaskPriority>())
        .transpose()?;

    let task = TaskRepo::create(
        &state.pool,
        auth.user_id,
        name,
        input.deadline,
        priority,
        input.category.as_deref(),
    )
    .await?;

    tracing::info!(task_id = task.id, user_id = %auth.user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
///
/// Overwrite a task's editable fields.
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let name = match input.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Task name cannot be empty.".into(),
            )))
        }
    };

    let priority = input
        .priority
        .as_deref()
        .map(|p| p.parse::<TaskPriority>())
        .transpose()?;
    let status = input
        .status
        .as_deref()
        .map(|s| s.parse::<TaskStatus>())
        .transpose()?;

    let task = TaskRepo::update(
        &state.pool,
        auth.user_id,
        task_id,
        name,
        input.deadline,
        priority,
        input.category.as_deref(),
        status,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Task" }))?;

    tracing::info!(task_id, user_id = %auth.user_id, "Task updated");

    Ok(Json(task))
}

/// PATCH /tasks/{id}/status
///
/// Set only the status. Any known status may replace any other; the
/// Pending -> In Progress -> Completed progression is not enforced.
pub async fn update_task_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTaskStatus>,
) -> AppResult<Json<Task>> {
    let status = match input.status.as_deref() {
        Some(status) if !status.is_empty() => status.parse::<TaskStatus>()?,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Status is required.".into(),
            )))
        }
    };

    let task = TaskRepo::update_status(&state.pool, auth.user_id, task_id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task" }))?;

    tracing::info!(task_id, status = %status, user_id = %auth.user_id, "Task status updated");

    Ok(Json(task))
}

/// DELETE /tasks/{id}
///
/// Remove a task. Answers 204 whether or not a row matched; linked focus
/// sessions are never touched.
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, auth.user_id, task_id).await?;

    if deleted {
        tracing::info!(task_id, user_id = %auth.user_id, "Task deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
