//! HTTP-level tests for the profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, email_for, get_auth, put_json_auth, token_for};
use sqlx::PgPool;
use uuid::Uuid;

/// First read creates the row lazily with defaults and attaches the
/// provider-held email.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile_creates_default_row(pool: PgPool) {
    let user = Uuid::new_v4();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/profile", &token_for(user)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.to_string());
    assert_eq!(json["email"], email_for(user));
    assert_eq!(json["first_name"], serde_json::Value::Null);
    assert_eq!(json["daily_goal_minutes"], 240);
}

/// PUT overwrites the editable fields and echoes the updated row.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile(pool: PgPool) {
    let user = Uuid::new_v4();
    let token = token_for(user);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "firstName": "Leah",
        "lastName": "Okafor",
        "studyYear": "Third Year",
        "major": "Information Technology",
        "dailyGoalMinutes": 300,
    });
    let response = put_json_auth(app, "/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Leah");
    assert_eq!(json["last_name"], "Okafor");
    assert_eq!(json["study_year"], "Third Year");
    assert_eq!(json["major"], "Information Technology");
    assert_eq!(json["daily_goal_minutes"], 300);

    // The update persists across a fresh read.
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/profile", &token).await).await;
    assert_eq!(json["first_name"], "Leah");
    assert_eq!(json["daily_goal_minutes"], 300);
}

/// An absent daily goal keeps the stored value.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_keeps_goal_when_absent(pool: PgPool) {
    let user = Uuid::new_v4();
    let token = token_for(user);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "firstName": "Leah", "dailyGoalMinutes": 300 });
    put_json_auth(app, "/profile", body, &token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "firstName": "Leah-Marie" });
    let json = body_json(put_json_auth(app, "/profile", body, &token).await).await;
    assert_eq!(json["first_name"], "Leah-Marie");
    assert_eq!(json["daily_goal_minutes"], 300);
}

/// First name is required; a negative goal is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_validation(pool: PgPool) {
    let token = token_for(Uuid::new_v4());

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, "/profile", serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "First name is required.");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "firstName": "Leah", "dailyGoalMinutes": -5 });
    let response = put_json_auth(app, "/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
