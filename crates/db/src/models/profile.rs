//! Profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studypulse_core::types::{Timestamp, UserId};

/// Full profile row from the `profiles` table.
///
/// One-to-one with an identity-provider user (same id). The row normally
/// pre-exists via a provider-side trigger; the repository creates it
/// lazily when it does not.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub study_year: Option<String>,
    pub major: Option<String>,
    pub avatar_url: Option<String>,
    pub daily_goal_minutes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `PUT /profile` (camelCase on the wire).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub study_year: Option<String>,
    pub major: Option<String>,
    pub daily_goal_minutes: Option<i32>,
}
