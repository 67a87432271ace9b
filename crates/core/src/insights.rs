//! Prompt assembly for the AI insights feature.
//!
//! The client may send a digest of its current tasks and progress stats;
//! both sections are optional. The prompt is plain text rendered here so
//! the generative backend stays a dumb text-in/text-out collaborator.

use serde::Deserialize;

use crate::stats::WeeklyFocus;

/// Task digest as submitted by the client with an insights request.
///
/// Fields beyond the name are optional so partial client payloads still
/// produce a usable prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDigest {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Progress digest as submitted by the client with an insights request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDigest {
    #[serde(default)]
    pub study_streak: i64,
    #[serde(default)]
    pub earned_badges: Vec<String>,
    #[serde(default)]
    pub weekly_focus_hours: Vec<WeeklyFocus>,
}

/// Render the study-coach prompt for the generative backend.
///
/// Works with both, either, or neither section present; an empty request
/// still yields a well-formed prompt asking for general advice.
pub fn build_prompt(tasks: Option<&[TaskDigest]>, progress: Option<&ProgressDigest>) -> String {
    let mut prompt = String::from(
        "You are a friendly study coach for a university student using a \
         task and focus-session tracker. Based on the data below, give the \
         student short, encouraging, actionable insights about their study \
         habits. Answer in markdown with a few brief sections.\n",
    );

    match tasks {
        Some(tasks) if !tasks.is_empty() => {
            prompt.push_str("\nCurrent tasks:\n");
            for task in tasks {
                prompt.push_str(&format!("- {}", task.name));
                if let Some(status) = &task.status {
                    prompt.push_str(&format!(" [{status}]"));
                }
                if let Some(priority) = &task.priority {
                    prompt.push_str(&format!(" (priority: {priority})"));
                }
                if let Some(deadline) = &task.deadline {
                    prompt.push_str(&format!(" (due: {deadline})"));
                }
                if let Some(category) = &task.category {
                    prompt.push_str(&format!(" (category: {category})"));
                }
                prompt.push('\n');
            }
        }
        _ => prompt.push_str("\nThe student has no tasks recorded.\n"),
    }

    match progress {
        Some(progress) => {
            prompt.push_str(&format!(
                "\nStudy streak: {} day(s).\n",
                progress.study_streak
            ));
            if !progress.earned_badges.is_empty() {
                prompt.push_str(&format!(
                    "Earned badges: {}.\n",
                    progress.earned_badges.join(", ")
                ));
            }
            if !progress.weekly_focus_hours.is_empty() {
                prompt.push_str("Focus minutes over the last week:\n");
                for bucket in &progress.weekly_focus_hours {
                    prompt.push_str(&format!("- {}: {} min\n", bucket.day, bucket.total_minutes));
                }
            }
        }
        None => prompt.push_str("\nNo progress statistics were provided.\n"),
    }

    prompt
}
