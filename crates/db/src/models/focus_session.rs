//! Focus-session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studypulse_core::types::{DbId, Timestamp, UserId};

/// Full focus-session row from the `focus_sessions` table.
///
/// Immutable once created; there is no update or delete endpoint. The
/// `task_id` is a soft reference that may dangle after the task is
/// deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FocusSession {
    pub id: DbId,
    pub user_id: UserId,
    pub task_id: Option<DbId>,
    pub duration_minutes: i32,
    pub created_at: Timestamp,
}

/// Request body for `POST /focus-sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateFocusSession {
    pub duration_minutes: Option<i32>,
    pub task_id: Option<DbId>,
}
