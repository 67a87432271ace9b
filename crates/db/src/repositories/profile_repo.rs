//! Repository for the `profiles` table.
//!
//! Profile rows are keyed by the identity provider's user id. The
//! provider normally creates the row via its own trigger at sign-up, but
//! that trigger is outside this system, so reads go through [`ensure`]
//! which creates a default row on first access.
//!
//! [`ensure`]: ProfileRepo::ensure

use sqlx::PgPool;
use studypulse_core::types::UserId;

use crate::models::profile::{Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, study_year, major, avatar_url, \
     daily_goal_minutes, created_at, updated_at";

/// Default daily focus goal in minutes (mirrors the column default).
const DEFAULT_DAILY_GOAL_MINUTES: i32 = 240;

/// Provides lookups and upserts for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch a profile row, if one exists.
    pub async fn find(pool: &PgPool, user_id: UserId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a profile row, creating a default one when absent.
    pub async fn ensure(pool: &PgPool, user_id: UserId) -> Result<Profile, sqlx::Error> {
        if let Some(profile) = Self::find(pool, user_id).await? {
            return Ok(profile);
        }

        sqlx::query("INSERT INTO profiles (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        match Self::find(pool, user_id).await? {
            Some(profile) => Ok(profile),
            None => Err(sqlx::Error::RowNotFound),
        }
    }

    /// Set the name fields after sign-up, creating the row when the
    /// provider-side trigger has not (names stay untouched when absent).
    pub async fn upsert_names(
        pool: &PgPool,
        user_id: UserId,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO profiles (id, first_name, last_name)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET
                 first_name = COALESCE(EXCLUDED.first_name, profiles.first_name),
                 last_name  = COALESCE(EXCLUDED.last_name, profiles.last_name)",
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite the editable profile fields, creating the row when
    /// absent. An absent daily goal keeps the stored value (or the
    /// default on first insert).
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        input: &UpdateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, first_name, last_name, study_year, major, daily_goal_minutes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, {DEFAULT_DAILY_GOAL_MINUTES}))
             ON CONFLICT (id) DO UPDATE SET
                 first_name = EXCLUDED.first_name,
                 last_name = EXCLUDED.last_name,
                 study_year = EXCLUDED.study_year,
                 major = EXCLUDED.major,
                 daily_goal_minutes = COALESCE($6, profiles.daily_goal_minutes)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.study_year)
            .bind(&input.major)
            .bind(input.daily_goal_minutes)
            .fetch_one(pool)
            .await
    }

    /// The user's configured daily focus goal, if a profile row exists.
    pub async fn daily_goal_minutes(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT daily_goal_minutes FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
