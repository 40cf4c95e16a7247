//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use repbot_core::entities::ReputationRecord;

use super::responses::ReputationResponse;

impl From<&ReputationRecord> for ReputationResponse {
    fn from(record: &ReputationRecord) -> Self {
        Self {
            id: record.id,
            telegram_id: record.telegram_id.clone(),
            username: record.username.clone(),
            fullname: record.fullname.clone(),
            user_avatar: record.user_avatar.clone(),
            reputation: record.reputation,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<ReputationRecord> for ReputationResponse {
    fn from(record: ReputationRecord) -> Self {
        Self {
            id: record.id,
            telegram_id: record.telegram_id,
            username: record.username,
            fullname: record.fullname,
            user_avatar: record.user_avatar,
            reputation: record.reputation,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
