//! Statistics derivation: raw rows in, view-models out.
//!
//! Every function here is total: missing upstream data is coerced to its
//! zero value (`0` / empty list) instead of erroring, mirroring the
//! fallback policy of the consuming client. Store and identity failures
//! are handled a layer up, before these functions run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Badge thresholds
// ---------------------------------------------------------------------------

/// Minimum streak length (days) for the "3-Day Streak" badge.
pub const STREAK_BADGE_DAYS: i64 = 3;
/// Minimum completed-task count for the "Task Master" badge.
pub const TASK_MASTER_COMPLETED: i64 = 10;
/// Minimum total focus minutes for the "Marathon Runner" badge.
pub const MARATHON_MINUTES: i64 = 500;

// ---------------------------------------------------------------------------
// Aggregate rows (as returned by the store procedures)
// ---------------------------------------------------------------------------

/// One day bucket of the trailing-week focus aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyFocus {
    /// Day label, e.g. `"Mon"`.
    pub day: String,
    pub total_minutes: i64,
}

/// One day bucket of the tasks-completed-over-time aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksCompleted {
    pub day: String,
    pub completed_count: i64,
}

/// A nearest-deadline task shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingTask {
    pub name: String,
    pub deadline: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// A display label derived from current aggregate counts.
///
/// Badges are recomputed on every stats request and never persisted, so a
/// badge disappears if the underlying counts regress (e.g. a completed
/// task is deleted). That regression is contractual, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Focus Starter")]
    FocusStarter,
    #[serde(rename = "3-Day Streak")]
    ThreeDayStreak,
    #[serde(rename = "Task Master")]
    TaskMaster,
    #[serde(rename = "Marathon Runner")]
    MarathonRunner,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Self::FocusStarter => "Focus Starter",
            Self::ThreeDayStreak => "3-Day Streak",
            Self::TaskMaster => "Task Master",
            Self::MarathonRunner => "Marathon Runner",
        }
    }
}

/// Evaluate the badge predicates in declaration order.
///
/// Each predicate is evaluated exactly once, so the result is duplicate-free
/// and ordered: Focus Starter, 3-Day Streak, Task Master, Marathon Runner.
pub fn earned_badges(
    total_focus_sessions: usize,
    current_streak: i64,
    completed_tasks: i64,
    total_focus_minutes: i64,
) -> Vec<Badge> {
    let mut badges = Vec::new();
    if total_focus_sessions > 0 {
        badges.push(Badge::FocusStarter);
    }
    if current_streak >= STREAK_BADGE_DAYS {
        badges.push(Badge::ThreeDayStreak);
    }
    if completed_tasks >= TASK_MASTER_COMPLETED {
        badges.push(Badge::TaskMaster);
    }
    if total_focus_minutes >= MARATHON_MINUTES {
        badges.push(Badge::MarathonRunner);
    }
    badges
}

// ---------------------------------------------------------------------------
// View-models
// ---------------------------------------------------------------------------

/// Payload of `GET /dashboard-stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub tasks_due_today: i64,
    pub upcoming_tasks: Vec<UpcomingTask>,
    pub current_streak: i64,
    pub weekly_focus_hours: Vec<WeeklyFocus>,
    pub daily_goal_minutes: i32,
}

/// Payload of `GET /progress-stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub weekly_focus_hours: Vec<WeeklyFocus>,
    pub tasks_completed_over_time: Vec<TasksCompleted>,
    pub study_streak: i64,
    pub earned_badges: Vec<Badge>,
}

/// Payload of `GET /profile-stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// Percentage of tasks completed, rounded to the nearest integer.
    pub success_rate: i64,
    /// Total focus time in hours, rounded to one decimal place.
    pub focus_hours: f64,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Assemble the dashboard view-model. Absent inputs become zero values.
pub fn dashboard_stats(
    tasks_due_today: Option<i64>,
    upcoming_tasks: Option<Vec<UpcomingTask>>,
    weekly_focus_hours: Option<Vec<WeeklyFocus>>,
    current_streak: Option<i64>,
    daily_goal_minutes: Option<i32>,
) -> DashboardStats {
    DashboardStats {
        tasks_due_today: tasks_due_today.unwrap_or(0),
        upcoming_tasks: upcoming_tasks.unwrap_or_default(),
        current_streak: current_streak.unwrap_or(0),
        weekly_focus_hours: weekly_focus_hours.unwrap_or_default(),
        daily_goal_minutes: daily_goal_minutes.unwrap_or(0),
    }
}

/// Assemble the progress view-model, deriving session totals and badges
/// from the raw focus-session duration list.
pub fn progress_stats(
    weekly_focus_hours: Option<Vec<WeeklyFocus>>,
    tasks_completed_over_time: Option<Vec<TasksCompleted>>,
    current_streak: Option<i64>,
    completed_tasks_count: Option<i64>,
    focus_session_durations: &[i32],
) -> ProgressStats {
    let streak = current_streak.unwrap_or(0);
    let completed = completed_tasks_count.unwrap_or(0);
    let total_sessions = focus_session_durations.len();
    let total_minutes: i64 = focus_session_durations.iter().map(|&d| i64::from(d)).sum();

    ProgressStats {
        weekly_focus_hours: weekly_focus_hours.unwrap_or_default(),
        tasks_completed_over_time: tasks_completed_over_time.unwrap_or_default(),
        study_streak: streak,
        earned_badges: earned_badges(total_sessions, streak, completed, total_minutes),
    }
}

/// Assemble the profile statistics view-model.
pub fn profile_stats(
    total_tasks: i64,
    completed_tasks: i64,
    focus_session_durations: &[i32],
) -> ProfileStats {
    let success_rate = if total_tasks > 0 {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as i64
    } else {
        0
    };

    let total_minutes: i64 = focus_session_durations.iter().map(|&d| i64::from(d)).sum();
    let focus_hours = (total_minutes as f64 / 60.0 * 10.0).round() / 10.0;

    ProfileStats {
        total_tasks,
        completed_tasks,
        success_rate,
        focus_hours,
    }
}
