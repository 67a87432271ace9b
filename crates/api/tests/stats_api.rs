//! HTTP-level tests for the three aggregate-stats endpoints, including
//! badge derivation and its recompute-on-read semantics.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, token_for};
use sqlx::PgPool;
use studypulse_core::task::TaskStatus;
use studypulse_db::repositories::{FocusSessionRepo, ProfileRepo, TaskRepo};
use uuid::Uuid;

/// Insert a focus session backdated by `days_ago` days.
async fn seed_session_days_ago(pool: &PgPool, user: Uuid, minutes: i32, days_ago: i32) {
    sqlx::query(
        "INSERT INTO focus_sessions (user_id, duration_minutes, created_at)
         VALUES ($1, $2, now() - ($3 || ' days')::interval)",
    )
    .bind(user)
    .bind(minutes)
    .bind(days_ago.to_string())
    .execute(pool)
    .await
    .unwrap();
}

/// Create `count` completed tasks for `user`.
async fn seed_completed_tasks(pool: &PgPool, user: Uuid, count: usize) {
    for i in 0..count {
        let task = TaskRepo::create(pool, user, &format!("task {i}"), None, None, None)
            .await
            .unwrap();
        TaskRepo::update_status(pool, user, task.id, TaskStatus::Completed)
            .await
            .unwrap()
            .unwrap();
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// A brand-new user gets zero values: empty arrays, never null.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_zero_state(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/dashboard-stats", &token_for(Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tasksDueToday"], 0);
    assert_eq!(json["upcomingTasks"], serde_json::json!([]));
    assert_eq!(json["currentStreak"], 0);
    // The weekly aggregate is always 7 zero-filled buckets.
    assert_eq!(json["weeklyFocusHours"].as_array().unwrap().len(), 7);
    // No profile row yet: the goal falls back to its zero value.
    assert_eq!(json["dailyGoalMinutes"], 0);
}

/// Due-today counts exclude completed tasks; upcoming is capped at the
/// two nearest deadlines and excludes completed tasks.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_due_today_and_upcoming(pool: PgPool) {
    let user = Uuid::new_v4();
    let today = chrono::Utc::now().date_naive();

    TaskRepo::create(&pool, user, "due today", Some(today), None, None)
        .await
        .unwrap();
    let done = TaskRepo::create(&pool, user, "done today", Some(today), None, None)
        .await
        .unwrap();
    TaskRepo::update_status(&pool, user, done.id, TaskStatus::Completed)
        .await
        .unwrap()
        .unwrap();
    TaskRepo::create(&pool, user, "later", Some(today + chrono::Days::new(3)), None, None)
        .await
        .unwrap();
    TaskRepo::create(&pool, user, "much later", Some(today + chrono::Days::new(9)), None, None)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/dashboard-stats", &token_for(user)).await).await;

    assert_eq!(json["tasksDueToday"], 1);

    let upcoming = json["upcomingTasks"].as_array().unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0]["name"], "due today");
    assert_eq!(upcoming[1]["name"], "later");
}

/// The configured daily goal shows up once a profile row exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_daily_goal_from_profile(pool: PgPool) {
    let user = Uuid::new_v4();
    ProfileRepo::ensure(&pool, user).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/dashboard-stats", &token_for(user)).await).await;
    assert_eq!(json["dailyGoalMinutes"], 240);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// A fully-qualified user earns all four badges, in declaration order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_all_badges(pool: PgPool) {
    let user = Uuid::new_v4();

    // 3-day streak, 520 focus minutes across the sessions.
    seed_session_days_ago(&pool, user, 200, 0).await;
    seed_session_days_ago(&pool, user, 200, 1).await;
    seed_session_days_ago(&pool, user, 120, 2).await;
    seed_completed_tasks(&pool, user, 10).await;

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/progress-stats", &token_for(user)).await).await;

    assert_eq!(json["studyStreak"], 3);
    assert_eq!(
        json["earnedBadges"],
        serde_json::json!(["Focus Starter", "3-Day Streak", "Task Master", "Marathon Runner"])
    );
    assert_eq!(json["weeklyFocusHours"].as_array().unwrap().len(), 7);
    assert_eq!(json["tasksCompletedOverTime"].as_array().unwrap().len(), 7);
    // All ten completions happened today.
    assert_eq!(
        json["tasksCompletedOverTime"].as_array().unwrap()[6]["completed_count"],
        10
    );
}

/// Boundary: a 2-day streak and 9 completions earn neither threshold badge.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_badge_boundaries(pool: PgPool) {
    let user = Uuid::new_v4();

    seed_session_days_ago(&pool, user, 250, 0).await;
    seed_session_days_ago(&pool, user, 249, 1).await;
    seed_completed_tasks(&pool, user, 9).await;

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/progress-stats", &token_for(user)).await).await;

    // 499 total minutes, streak of 2, 9 completions: only Focus Starter.
    assert_eq!(json["earnedBadges"], serde_json::json!(["Focus Starter"]));
}

/// Badges are recomputed, not persisted: emptying the session log takes
/// "Focus Starter" away again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_badges_regress(pool: PgPool) {
    let user = Uuid::new_v4();
    FocusSessionRepo::create(&pool, user, 30, None).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/progress-stats", &token_for(user)).await).await;
    assert_eq!(json["earnedBadges"], serde_json::json!(["Focus Starter"]));

    sqlx::query("DELETE FROM focus_sessions WHERE user_id = $1")
        .bind(user)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/progress-stats", &token_for(user)).await).await;
    assert_eq!(json["earnedBadges"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Profile stats
// ---------------------------------------------------------------------------

/// Zero state: no division by zero, all zeros.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_stats_zero_state(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/profile-stats", &token_for(Uuid::new_v4())).await).await;

    assert_eq!(json["totalTasks"], 0);
    assert_eq!(json["completedTasks"], 0);
    assert_eq!(json["successRate"], 0);
    assert_eq!(json["focusHours"], 0.0);
}

/// 8 of 10 tasks completed and 125 hours of focus: 80% and 125.0.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_stats_rates(pool: PgPool) {
    let user = Uuid::new_v4();

    seed_completed_tasks(&pool, user, 8).await;
    TaskRepo::create(&pool, user, "open a", None, None, None).await.unwrap();
    TaskRepo::create(&pool, user, "open b", None, None, None).await.unwrap();
    FocusSessionRepo::create(&pool, user, 125 * 60, None)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/profile-stats", &token_for(user)).await).await;

    assert_eq!(json["totalTasks"], 10);
    assert_eq!(json["completedTasks"], 8);
    assert_eq!(json["successRate"], 80);
    assert_eq!(json["focusHours"], 125.0);
}

/// Stats are scoped per user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_stats_scoped(pool: PgPool) {
    let busy = Uuid::new_v4();
    let idle = Uuid::new_v4();
    seed_completed_tasks(&pool, busy, 3).await;

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/profile-stats", &token_for(idle)).await).await;
    assert_eq!(json["totalTasks"], 0);
}
