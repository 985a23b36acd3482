use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Free-form attributes describing a user, as returned by the image analyzer.
/// No schema beyond "JSON object" is enforced.
pub type Characteristics = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Per-user characteristics persistence.
///
/// `save` is an upsert that overwrites (never merges) the characteristics of an
/// existing record. `get` returns an empty map for unknown users.
/// Concurrent saves for one user race; the last write wins.
#[async_trait]
pub trait CharacteristicsStore: Send + Sync {
    async fn save(
        &self,
        user_id: &str,
        characteristics: &Characteristics,
    ) -> Result<SaveOutcome, AppError>;

    async fn get(&self, user_id: &str) -> Result<Characteristics, AppError>;
}

/// Reads a stored JSON value back as characteristics. Anything other than an
/// object is treated as "nothing stored".
fn into_characteristics(user_id: &str, value: Value) -> Characteristics {
    match value {
        Value::Object(map) => map,
        other => {
            warn!("User {user_id} has non-object characteristics ({other}); treating as empty");
            Characteristics::new()
        }
    }
}

/// PostgreSQL-backed store over the `users` table.
pub struct PgCharacteristicsStore {
    pool: PgPool,
}

impl PgCharacteristicsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacteristicsStore for PgCharacteristicsStore {
    async fn save(
        &self,
        user_id: &str,
        characteristics: &Characteristics,
    ) -> Result<SaveOutcome, AppError> {
        // xmax = 0 only for a row this statement inserted.
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO users (user_id, characteristics)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE
                SET characteristics = EXCLUDED.characteristics,
                    updated_at = now()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(user_id)
        .bind(Value::Object(characteristics.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Error saving characteristics to DB: {e}");
            AppError::Database(e)
        })?;

        let outcome = if inserted {
            SaveOutcome::Created
        } else {
            SaveOutcome::Updated
        };
        debug!("Successfully saved characteristics for user {user_id} ({outcome:?})");
        Ok(outcome)
    }

    async fn get(&self, user_id: &str) -> Result<Characteristics, AppError> {
        let stored: Option<Value> =
            sqlx::query_scalar("SELECT characteristics FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Error retrieving characteristics from DB: {e}");
                    AppError::Database(e)
                })?;

        match stored {
            Some(value) => Ok(into_characteristics(user_id, value)),
            None => {
                warn!("User {user_id} not found in database.");
                Ok(Characteristics::new())
            }
        }
    }
}
