use crate::error::Result;
use crate::models::profile::UserProfile;
use sqlx::SqlitePool;

/// Persists one JSON profile document per user in `ai_recruiter_profiles`.
/// The row key is literally `"ai_profile_" + user_id`. Saves are upserts:
/// last write wins, concurrent turns for one user are not synchronized.
#[derive(Clone)]
pub struct ProfileStore {
    pool: SqlitePool,
}

fn profile_key(user_id: &str) -> String {
    format!("ai_profile_{}", user_id)
}

impl ProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, profile: &UserProfile) -> Result<()> {
        let payload = serde_json::to_string(profile)?;
        sqlx::query(
            r#"
            INSERT INTO ai_recruiter_profiles (profile_key, user_id, profile, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(profile_key) DO UPDATE
                SET profile = excluded.profile, updated_at = excluded.updated_at
            "#,
        )
        .bind(profile_key(&profile.user_id))
        .bind(&profile.user_id)
        .bind(payload)
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn load(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT profile FROM ai_recruiter_profiles WHERE profile_key = ?")
                .bind(profile_key(user_id))
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((payload,)) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM ai_recruiter_profiles WHERE profile_key = ?")
            .bind(profile_key(user_id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
