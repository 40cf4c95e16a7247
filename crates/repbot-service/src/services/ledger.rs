//! Reputation ledger service
//!
//! Get-or-create score mutations over the reputation repository. Every
//! mutation is one `upsert_adjust` call, so concurrent events targeting the
//! same user never lose updates.

use repbot_core::entities::{ChatUser, NewReputation, ReputationRecord};
use repbot_core::traits::ReputationRepository;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Score a record starts with, whichever mutation created it
pub const INITIAL_REPUTATION: i64 = 1;

/// Identity fields written when a record is first created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReputationProfile {
    pub username: String,
    pub fullname: String,
    pub user_avatar: String,
}

impl ReputationProfile {
    pub fn from_user(user: &ChatUser, user_avatar: impl Into<String>) -> Self {
        Self {
            username: user.username_or_empty().to_string(),
            fullname: user.full_name(),
            user_avatar: user_avatar.into(),
        }
    }

    fn to_new_record(&self, telegram_id: &str) -> NewReputation {
        NewReputation::new(
            telegram_id,
            self.username.as_str(),
            self.fullname.as_str(),
            self.user_avatar.as_str(),
            INITIAL_REPUTATION,
        )
    }
}

/// Ledger service
pub struct LedgerService<'a> {
    repo: &'a dyn ReputationRepository,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService over a repository
    pub fn new(repo: &'a dyn ReputationRepository) -> Self {
        Self { repo }
    }

    pub fn from_context(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx.reputation_repo())
    }

    /// Look up a record by platform user id
    #[instrument(skip(self))]
    pub async fn get(&self, telegram_id: &str) -> ServiceResult<Option<ReputationRecord>> {
        Ok(self.repo.find_by_telegram_id(telegram_id).await?)
    }

    /// Create the record at 1, or add 1 to the existing score
    #[instrument(skip(self, profile))]
    pub async fn create_or_increment(
        &self,
        telegram_id: &str,
        profile: &ReputationProfile,
    ) -> ServiceResult<ReputationRecord> {
        self.adjust(telegram_id, profile, 1).await
    }

    /// Create the record at 1, or subtract 1 from the existing score.
    ///
    /// A first-ever decrement still creates the record at +1.
    #[instrument(skip(self, profile))]
    pub async fn create_or_decrement(
        &self,
        telegram_id: &str,
        profile: &ReputationProfile,
    ) -> ServiceResult<ReputationRecord> {
        self.adjust(telegram_id, profile, -1).await
    }

    async fn adjust(
        &self,
        telegram_id: &str,
        profile: &ReputationProfile,
        delta: i64,
    ) -> ServiceResult<ReputationRecord> {
        let record = self
            .repo
            .upsert_adjust(&profile.to_new_record(telegram_id), delta)
            .await?;

        info!(
            telegram_id = %record.telegram_id,
            reputation = record.reputation,
            delta,
            "Reputation adjusted"
        );

        Ok(record)
    }

    /// Remove a user's record. Returns whether one existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, telegram_id: &str) -> ServiceResult<bool> {
        let existed = self.repo.delete_by_telegram_id(telegram_id).await?;
        if existed {
            info!(telegram_id = %telegram_id, "Reputation deleted");
        }
        Ok(existed)
    }

    /// All records, highest score first; ties keep creation order
    #[instrument(skip(self))]
    pub async fn list_by_reputation(&self) -> ServiceResult<Vec<ReputationRecord>> {
        let mut records = self.repo.find_all().await?;
        records.sort_by(|a, b| b.reputation.cmp(&a.reputation).then(a.id.cmp(&b.id)));
        Ok(records)
    }
}
