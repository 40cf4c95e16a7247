//! Membership lifecycle handler
//!
//! Greets joining members, purges the ledger record of leaving members and
//! answers reply-target liveness queries.

use repbot_core::entities::{ChatUser, MembershipStatus};
use repbot_core::value_objects::{ChatId, UserId};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ledger::LedgerService;
use super::notifier::NotificationService;

pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Welcome a new member. No state changes.
    #[instrument(skip(self, member), fields(user_id = %member.id))]
    pub async fn greet(&self, chat_id: ChatId, member: &ChatUser) {
        NotificationService::new(self.ctx).greet(chat_id, member).await;
    }

    /// Drop a departed member's record. Returns whether one existed.
    #[instrument(skip(self, member), fields(user_id = %member.id))]
    pub async fn purge(&self, member: &ChatUser) -> ServiceResult<bool> {
        let existed = LedgerService::from_context(self.ctx)
            .delete(&member.id.ledger_key())
            .await?;

        info!(existed, "Member left");
        Ok(existed)
    }

    /// Current presence of a user in a chat
    #[instrument(skip(self))]
    pub async fn current_status(
        &self,
        chat_id: ChatId,
        user_id: UserId,
    ) -> ServiceResult<MembershipStatus> {
        Ok(self.ctx.transport().get_chat_member(chat_id, user_id).await?)
    }
}
