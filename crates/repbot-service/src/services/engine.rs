//! Reputation event engine
//!
//! Routes chat events to the membership handler or through
//! classify → avatar → ledger → notify. Each event runs in its own task so a
//! failing or panicking handler never stops the loop.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use repbot_core::entities::{ChatMessage, ChatUser, MessageContent, ReputationRecord};
use repbot_core::events::{Action, ChatEvent, IgnoreReason};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, instrument, warn};

use super::avatar::AvatarResolver;
use super::classifier::Classifier;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ledger::{LedgerService, ReputationProfile};
use super::membership::MembershipService;
use super::notifier::NotificationService;

/// What handling one event amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Greeted,
    Purged { existed: bool },
    Ignored(IgnoreReason),
    Adjusted(ReputationRecord),
    PollingErrorLogged,
}

#[derive(Clone)]
pub struct ReputationEngine {
    ctx: ServiceContext,
    classifier: Arc<Classifier>,
}

impl ReputationEngine {
    pub fn new(ctx: ServiceContext) -> Self {
        let classifier = Classifier::new(ctx.settings().bot_username.as_str());
        Self {
            ctx,
            classifier: Arc::new(classifier),
        }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Consume events until the stream ends, then wait for in-flight handlers
    pub async fn run<S>(&self, events: S)
    where
        S: Stream<Item = ChatEvent>,
    {
        let mut events = std::pin::pin!(events);
        let mut tasks = JoinSet::new();

        info!("Reputation engine started");

        while let Some(event) = events.next().await {
            let engine = self.clone();
            tasks.spawn(async move { engine.dispatch(event).await });

            while let Some(result) = tasks.try_join_next() {
                log_join_result(result);
            }
        }

        while let Some(result) = tasks.join_next().await {
            log_join_result(result);
        }

        info!("Reputation engine stopped");
    }

    async fn dispatch(&self, event: ChatEvent) {
        let event_type = event.event_type();
        if let Err(e) = self.handle(event).await {
            error!(event_type, error = %e, "Failed to handle event");
        }
    }

    /// Handle a single event
    #[instrument(skip(self, event), fields(event_type = event.event_type()))]
    pub async fn handle(&self, event: ChatEvent) -> ServiceResult<EventOutcome> {
        match event {
            ChatEvent::NewMember { chat_id, member } => {
                MembershipService::new(&self.ctx).greet(chat_id, &member).await;
                Ok(EventOutcome::Greeted)
            }
            ChatEvent::LeftMember { member, .. } => {
                let existed = MembershipService::new(&self.ctx).purge(&member).await?;
                Ok(EventOutcome::Purged { existed })
            }
            ChatEvent::Message(message) => self.handle_message(message).await,
            ChatEvent::PollingError { cause } => {
                warn!(cause = %cause, "Polling error");
                Ok(EventOutcome::PollingErrorLogged)
            }
        }
    }

    async fn handle_message(&self, message: ChatMessage) -> ServiceResult<EventOutcome> {
        let target_status = match &message.reply_to {
            Some(target) => Some(
                MembershipService::new(&self.ctx)
                    .current_status(message.chat_id, target.id)
                    .await?,
            ),
            None => None,
        };

        let notifier = NotificationService::new(&self.ctx);

        let action = self.classifier.classify(&message, target_status);
        match &action {
            Action::Ignore(IgnoreReason::TargetLeft) => {
                debug!(chat_id = %message.chat_id, "Reply target has left");
                notifier.announce_departure(message.chat_id).await;
                Ok(EventOutcome::Ignored(IgnoreReason::TargetLeft))
            }
            Action::Ignore(reason) => {
                debug!(chat_id = %message.chat_id, reason = %reason, "Message ignored");
                Ok(EventOutcome::Ignored(*reason))
            }
            Action::Thank(target) | Action::Unthank(target) => {
                self.apply(&message, target, action.delta(), &notifier)
                    .await
            }
        }
    }

    async fn apply(
        &self,
        message: &ChatMessage,
        target: &ChatUser,
        delta: i64,
        notifier: &NotificationService<'_>,
    ) -> ServiceResult<EventOutcome> {
        if let MessageContent::Sticker(sticker) = &message.content {
            if let Some(emoji) = sticker.emoji.as_deref() {
                notifier.announce_sticker(message.chat_id, emoji).await;
            }
        }

        let avatar = AvatarResolver::new(&self.ctx).resolve(target.id).await;
        let profile = ReputationProfile::from_user(target, avatar);
        let telegram_id = target.id.ledger_key();

        let ledger = LedgerService::from_context(&self.ctx);
        let record = if delta > 0 {
            ledger.create_or_increment(&telegram_id, &profile).await?
        } else {
            ledger.create_or_decrement(&telegram_id, &profile).await?
        };

        notifier
            .announce_change(message.chat_id, target, &message.from, record.reputation)
            .await;

        Ok(EventOutcome::Adjusted(record))
    }
}

fn log_join_result(result: Result<(), JoinError>) {
    if let Err(e) = result {
        if e.is_panic() {
            error!(error = %e, "Event handler panicked");
        } else {
            warn!(error = %e, "Event handler cancelled");
        }
    }
}

impl std::fmt::Debug for ReputationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReputationEngine")
            .field("ctx", &self.ctx)
            .field("classifier", &self.classifier)
            .finish()
    }
}
