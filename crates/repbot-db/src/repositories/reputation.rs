//! PostgreSQL implementation of ReputationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use repbot_core::entities::{NewReputation, ReputationRecord};
use repbot_core::traits::{RepoResult, ReputationRepository};

use crate::mappers::ReputationInsert;
use crate::models::ReputationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReputationRepository
#[derive(Clone)]
pub struct PgReputationRepository {
    pool: PgPool,
}

impl PgReputationRepository {
    /// Create a new PgReputationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReputationRepository for PgReputationRepository {
    #[instrument(skip(self))]
    async fn find_by_telegram_id(&self, telegram_id: &str) -> RepoResult<Option<ReputationRecord>> {
        let result = sqlx::query_as::<_, ReputationModel>(
            r"
            SELECT id, telegram_id, username, fullname, user_avatar, reputation,
                   created_at, updated_at
            FROM reputations
            WHERE telegram_id = $1
            ",
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReputationRecord::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ReputationRecord>> {
        let results = sqlx::query_as::<_, ReputationModel>(
            r"
            SELECT id, telegram_id, username, fullname, user_avatar, reputation,
                   created_at, updated_at
            FROM reputations
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReputationRecord::from).collect())
    }

    #[instrument(skip(self, new), fields(telegram_id = %new.telegram_id))]
    async fn upsert_adjust(&self, new: &NewReputation, delta: i64) -> RepoResult<ReputationRecord> {
        let insert = ReputationInsert::new(new);

        // Single statement: the row lock taken by ON CONFLICT serializes
        // concurrent adjustments of the same telegram_id.
        let result = sqlx::query_as::<_, ReputationModel>(
            r"
            INSERT INTO reputations (telegram_id, username, fullname, user_avatar, reputation)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (telegram_id) DO UPDATE
            SET reputation = reputations.reputation + $6,
                updated_at = NOW()
            RETURNING id, telegram_id, username, fullname, user_avatar, reputation,
                      created_at, updated_at
            ",
        )
        .bind(insert.telegram_id)
        .bind(insert.username)
        .bind(insert.fullname)
        .bind(insert.user_avatar)
        .bind(insert.reputation)
        .bind(delta)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ReputationRecord::from(result))
    }

    #[instrument(skip(self))]
    async fn delete_by_telegram_id(&self, telegram_id: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reputations WHERE telegram_id = $1
            ",
        )
        .bind(telegram_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
