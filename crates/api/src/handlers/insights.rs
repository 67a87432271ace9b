//! Handler for the `/get-insights` endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use studypulse_core::insights::{self, ProgressDigest, TaskDigest};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /get-insights`. Both sections are optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[serde(default)]
    pub tasks: Option<Vec<TaskDigest>>,
    #[serde(default)]
    pub progress_stats: Option<ProgressDigest>,
}

/// Response body: the generated markdown text.
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: String,
}

/// POST /get-insights
///
/// Assemble the study-coach prompt from the submitted digests and
/// forward it to the generative backend. Backend failures surface as 500
/// with the upstream message.
pub async fn get_insights(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<InsightsRequest>,
) -> AppResult<Json<InsightsResponse>> {
    let prompt = insights::build_prompt(input.tasks.as_deref(), input.progress_stats.as_ref());

    tracing::debug!(
        user_id = %auth.user_id,
        prompt_chars = prompt.len(),
        "Requesting insights"
    );

    let insights = state.insights.generate(&prompt).await?;

    Ok(Json(InsightsResponse { insights }))
}
