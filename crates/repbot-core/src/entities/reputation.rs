//! Reputation entity - a chat participant's score in the ledger

use chrono::{DateTime, Utc};

/// Reputation record, one per `telegram_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReputationRecord {
    pub id: i64,
    pub telegram_id: String,
    pub username: String,
    pub fullname: String,
    pub user_avatar: String,
    pub reputation: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReputationRecord {
    /// Check if the record belongs to the given platform user id
    #[inline]
    pub fn is_for(&self, telegram_id: &str) -> bool {
        self.telegram_id == telegram_id
    }
}

/// Values used to create a record when none exists yet
///
/// Identity fields are only written on creation; adjusting an existing
/// record never touches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReputation {
    pub telegram_id: String,
    pub username: String,
    pub fullname: String,
    pub user_avatar: String,
    pub reputation: i64,
}

impl NewReputation {
    /// Create a new record template with the given starting score
    pub fn new(
        telegram_id: impl Into<String>,
        username: impl Into<String>,
        fullname: impl Into<String>,
        user_avatar: impl Into<String>,
        reputation: i64,
    ) -> Self {
        Self {
            telegram_id: telegram_id.into(),
            username: username.into(),
            fullname: fullname.into(),
            user_avatar: user_avatar.into(),
            reputation,
        }
    }

    /// Materialize into a record with store-assigned id and timestamps
    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> ReputationRecord {
        ReputationRecord {
            id,
            telegram_id: self.telegram_id,
            username: self.username,
            fullname: self.fullname,
            user_avatar: self.user_avatar,
            reputation: self.reputation,
            created_at: now,
            updated_at: now,
        }
    }
}
