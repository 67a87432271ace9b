//! Wrappers around the store's aggregate procedures.
//!
//! The streak and time-bucket computations live in the store as SQL
//! functions; this module only invokes them and maps the rows onto the
//! core aggregate types.

use sqlx::PgPool;
use studypulse_core::stats::{TasksCompleted, WeeklyFocus};
use studypulse_core::types::UserId;

/// Invokes the aggregate procedures for one user.
pub struct StatsRepo;

impl StatsRepo {
    /// Focus minutes per day over the trailing week (7 rows, today last).
    pub async fn weekly_focus_hours(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<WeeklyFocus>, sqlx::Error> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT day, total_minutes FROM get_weekly_focus_hours($1)")
                .bind(user_id)
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(day, total_minutes)| WeeklyFocus { day, total_minutes })
            .collect())
    }

    /// Completed-task counts per day over the trailing week (7 rows).
    pub async fn tasks_completed_last_7_days(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<TasksCompleted>, sqlx::Error> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT day, completed_count FROM get_tasks_completed_last_7_days($1)")
                .bind(user_id)
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(day, completed_count)| TasksCompleted {
                day,
                completed_count,
            })
            .collect())
    }

    /// Consecutive-day focus streak as computed by the store.
    pub async fn streak(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
        let streak: i32 = sqlx::query_scalar("SELECT calculate_streak($1)")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(i64::from(streak))
    }
}
