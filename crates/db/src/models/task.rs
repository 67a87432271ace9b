//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studypulse_core::task::{TaskPriority, TaskStatus};
use studypulse_core::types::{DbId, Timestamp, UserId};

/// Full task row from the `tasks` table plus the derived focus total.
///
/// `total_focus_minutes` is not a column: every task query joins the
/// focus-session log and sums the linked durations, so the field is
/// always current and never persisted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: UserId,
    pub name: String,
    pub deadline: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub priority: TaskPriority,
    pub category: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub total_focus_minutes: i64,
}

/// Request body for `POST /tasks`.
///
/// `name` is `Option` so the handler can return the field-specific 400
/// instead of a deserialization rejection. Unknown priority strings are
/// rejected by the handler before any store access.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub name: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// Request body for `PUT /tasks/{id}`.
///
/// Absent `priority`/`status` leave the column unchanged; absent
/// `deadline`/`category` clear it (the client always sends the full form).
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Request body for `PATCH /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatus {
    pub status: Option<String>,
}

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub status: Option<String>,
}
