//! Reputation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reputations table
#[derive(Debug, Clone, FromRow)]
pub struct ReputationModel {
    pub id: i64,
    pub telegram_id: String,
    pub username: String,
    pub fullname: String,
    pub user_avatar: String,
    pub reputation: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
