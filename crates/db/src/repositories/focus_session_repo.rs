//! Repository for the append-only `focus_sessions` table.

use sqlx::PgPool;
use studypulse_core::types::{DbId, UserId};

use crate::models::focus_session::FocusSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, task_id, duration_minutes, created_at";

/// Provides insert and aggregation reads for focus sessions.
pub struct FocusSessionRepo;

impl FocusSessionRepo {
    /// Append a focus session, returning the created row.
    ///
    /// `task_id` is stored as given; it is a soft reference and is not
    /// checked against the tasks table.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        duration_minutes: i32,
        task_id: Option<DbId>,
    ) -> Result<FocusSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO focus_sessions (user_id, duration_minutes, task_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FocusSession>(&query)
            .bind(user_id)
            .bind(duration_minutes)
            .bind(task_id)
            .fetch_one(pool)
            .await
    }

    /// All session durations for a user, in insertion order.
    pub async fn durations(pool: &PgPool, user_id: UserId) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT duration_minutes FROM focus_sessions WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
