//! Repository for the `tasks` table.
//!
//! Every query is scoped by the owning user's id, so a wrong id and a
//! wrong owner are indistinguishable to callers: both surface as "no
//! row". Task rows are always read together with their derived focus
//! total (sum of linked focus-session minutes).

use chrono::NaiveDate;
use sqlx::PgPool;
use studypulse_core::stats::UpcomingTask;
use studypulse_core::task::{TaskPriority, TaskStatus};
use studypulse_core::types::{DbId, UserId};

use crate::models::task::Task;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "t.id, t.user_id, t.name, t.deadline, t.priority, t.category, t.status, \
     t.completed_at, t.created_at, t.updated_at, \
     COALESCE(f.total_minutes, 0)::bigint AS total_focus_minutes";

/// Join computing the per-task focus total.
const FOCUS_TOTALS: &str = "LEFT JOIN (SELECT task_id, SUM(duration_minutes) AS total_minutes \
     FROM focus_sessions GROUP BY task_id) f ON f.task_id = t.id";

/// Provides CRUD and aggregate lookups for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List a user's tasks, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        user_id: UserId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks t {FOCUS_TOTALS}
                     WHERE t.user_id = $1 AND t.status = $2
                     ORDER BY t.created_at DESC, t.id DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(user_id)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks t {FOCUS_TOTALS}
                     WHERE t.user_id = $1
                     ORDER BY t.created_at DESC, t.id DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Fetch one task by id, scoped to its owner.
    pub async fn find(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks t {FOCUS_TOTALS}
             WHERE t.user_id = $1 AND t.id = $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new task (status starts at `Pending`), returning the row.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        name: &str,
        deadline: Option<NaiveDate>,
        priority: Option<TaskPriority>,
        category: Option<&str>,
    ) -> Result<Task, sqlx::Error> {
        // A fresh task has no focus sessions, so the derived total is 0.
        sqlx::query_as::<_, Task>(
            "WITH inserted AS (
                 INSERT INTO tasks (user_id, name, deadline, priority, category)
                 VALUES ($1, $2, $3, COALESCE($4, 'Medium'), $5)
                 RETURNING id, user_id, name, deadline, priority, category, status,
                           completed_at, created_at, updated_at
             )
             SELECT i.*, 0::bigint AS total_focus_minutes FROM inserted i",
        )
        .bind(user_id)
        .bind(name)
        .bind(deadline)
        .bind(priority.map(TaskPriority::as_str))
        .bind(category)
        .fetch_one(pool)
        .await
    }

    /// Overwrite a task. Absent priority/status leave the column as-is;
    /// absent deadline/category clear it. Returns `None` when no row
    /// matched (wrong id or wrong owner).
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        name: &str,
        deadline: Option<NaiveDate>,
        priority: Option<TaskPriority>,
        category: Option<&str>,
        status: Option<TaskStatus>,
    ) -> Result<Option<Task>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE tasks
             SET name = $3, deadline = $4, category = $5,
                 priority = COALESCE($6, priority),
                 status = COALESCE($7, status)
             WHERE user_id = $1 AND id = $2
             RETURNING id",
        )
        .bind(user_id)
        .bind(id)
        .bind(name)
        .bind(deadline)
        .bind(category)
        .bind(priority.map(TaskPriority::as_str))
        .bind(status.map(TaskStatus::as_str))
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find(pool, user_id, id).await,
            None => Ok(None),
        }
    }

    /// Set only the status. Returns `None` when no row matched.
    pub async fn update_status(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE tasks SET status = $3 WHERE user_id = $1 AND id = $2 RETURNING id",
        )
        .bind(user_id)
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find(pool, user_id, id).await,
            None => Ok(None),
        }
    }

    /// Delete a task. Returns `true` if a row was removed. Linked focus
    /// sessions are left untouched (their task_id dangles).
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all tasks for a user.
    pub async fn count_all(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Count completed tasks for a user.
    pub async fn count_completed(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND status = 'Completed'")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Count open tasks due on the given day.
    pub async fn count_due_on(
        pool: &PgPool,
        user_id: UserId,
        day: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks
             WHERE user_id = $1 AND deadline = $2 AND status <> 'Completed'",
        )
        .bind(user_id)
        .bind(day)
        .fetch_one(pool)
        .await
    }

    /// Nearest-deadline open tasks (tasks without a deadline sort last).
    pub async fn upcoming(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<UpcomingTask>, sqlx::Error> {
        let rows: Vec<(String, Option<NaiveDate>)> = sqlx::query_as(
            "SELECT name, deadline FROM tasks
             WHERE user_id = $1 AND status <> 'Completed'
             ORDER BY deadline ASC NULLS LAST
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, deadline)| UpcomingTask { name, deadline })
            .collect())
    }
}
