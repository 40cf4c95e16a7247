//! Notification dispatcher
//!
//! Renders bot messages and sends them fire-and-forget: a failed send is
//! logged and never retried.

use repbot_core::entities::{ChatUser, OutgoingMessage};
use repbot_core::value_objects::ChatId;
use tracing::{debug, warn};

use super::classifier::{THUMBS_DOWN, THUMBS_UP};
use super::context::ServiceContext;

pub const DASHBOARD_BUTTON_TEXT: &str = "Статистика чата";
pub const TARGET_LEFT_NOTICE: &str = "Нас покинул человек";
pub const THUMBS_UP_NOTICE: &str = "Кто то кого то похвалил. Репутация увеличена";
pub const THUMBS_DOWN_NOTICE: &str = "Палец вниз. Репутация будет снижена";

pub fn greeting_text(member: &ChatUser) -> String {
    format!("Привет, {}! Теперь ты в дурке...", member.first_name)
}

pub fn change_text(target: &ChatUser, actor: &ChatUser, score: i64) -> String {
    format!(
        "Внимание, {}! Участник {} изменил твою репутацию! Теперь твоя репутация {}",
        target.mention(),
        actor.first_name,
        score
    )
}

/// Notice posted before a sticker reaction is applied
pub fn sticker_notice(emoji: &str) -> Option<&'static str> {
    match emoji {
        THUMBS_UP => Some(THUMBS_UP_NOTICE),
        THUMBS_DOWN => Some(THUMBS_DOWN_NOTICE),
        _ => None,
    }
}

pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message, logging instead of failing
    pub async fn deliver(&self, chat_id: ChatId, message: OutgoingMessage) {
        match self.ctx.transport().send_message(chat_id, &message).await {
            Ok(()) => debug!(chat_id = %chat_id, "Message sent"),
            Err(e) => warn!(chat_id = %chat_id, error = %e, "Failed to send message"),
        }
    }

    /// Announce a new score with a link to the dashboard
    pub async fn announce_change(
        &self,
        chat_id: ChatId,
        target: &ChatUser,
        actor: &ChatUser,
        score: i64,
    ) {
        let message = OutgoingMessage::text(change_text(target, actor, score))
            .with_link(DASHBOARD_BUTTON_TEXT, self.ctx.settings().dashboard_url.as_str());
        self.deliver(chat_id, message).await;
    }

    pub async fn announce_sticker(&self, chat_id: ChatId, emoji: &str) {
        if let Some(notice) = sticker_notice(emoji) {
            self.deliver(chat_id, OutgoingMessage::text(notice)).await;
        }
    }

    pub async fn announce_departure(&self, chat_id: ChatId) {
        self.deliver(chat_id, OutgoingMessage::text(TARGET_LEFT_NOTICE))
            .await;
    }

    pub async fn greet(&self, chat_id: ChatId, member: &ChatUser) {
        self.deliver(chat_id, OutgoingMessage::text(greeting_text(member)))
            .await;
    }
}
