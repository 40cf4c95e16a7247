//! Reputation entity <-> model mapper

use repbot_core::entities::{NewReputation, ReputationRecord};

use crate::models::ReputationModel;

/// Convert ReputationModel to ReputationRecord entity
impl From<ReputationModel> for ReputationRecord {
    fn from(model: ReputationModel) -> Self {
        ReputationRecord {
            id: model.id,
            telegram_id: model.telegram_id,
            username: model.username,
            fullname: model.fullname,
            user_avatar: model.user_avatar,
            reputation: model.reputation,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed insert values for a new reputation row
pub struct ReputationInsert<'a> {
    pub telegram_id: &'a str,
    pub username: &'a str,
    pub fullname: &'a str,
    pub user_avatar: &'a str,
    pub reputation: i64,
}

impl<'a> ReputationInsert<'a> {
    pub fn new(new: &'a NewReputation) -> Self {
        Self {
            telegram_id: &new.telegram_id,
            username: &new.username,
            fullname: &new.fullname,
            user_avatar: &new.user_avatar,
            reputation: new.reputation,
        }
    }
}
