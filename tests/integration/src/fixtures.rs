//! Test fixtures and data generators
//!
//! Chat participants and events for end-to-end scenarios, plus the JSON
//! shape the API serves.

use chrono::{DateTime, Utc};
use repbot_core::entities::{ChatMessage, ChatUser, MessageContent, Sticker};
use repbot_core::value_objects::{ChatId, UserId};
use repbot_core::ChatEvent;
use serde::Deserialize;

pub const GROUP: ChatId = ChatId::new(-1_001_234_567_890);

pub fn alice() -> ChatUser {
    ChatUser::new(UserId::new(101), "Alice").with_username("alice")
}

pub fn bob() -> ChatUser {
    ChatUser::new(UserId::new(202), "Bob")
        .with_last_name("Builder")
        .with_username("bob")
}

pub fn carol() -> ChatUser {
    ChatUser::new(UserId::new(303), "Carol")
}

pub fn dave() -> ChatUser {
    ChatUser::new(UserId::new(404), "Dave")
}

/// The bot's own account
pub fn repbot() -> ChatUser {
    let mut user = ChatUser::new(UserId::new(999), "Reputation").with_username("RepBot");
    user.is_bot = true;
    user
}

/// `from` replies to `to` with a text message
pub fn reply_text(from: &ChatUser, to: &ChatUser, text: &str) -> ChatEvent {
    ChatEvent::Message(
        ChatMessage::new(GROUP, from.clone(), MessageContent::Text(text.to_string()))
            .replying_to(to.clone()),
    )
}

/// `from` replies to `to` with a sticker carrying `emoji`
pub fn reply_sticker(from: &ChatUser, to: &ChatUser, emoji: &str) -> ChatEvent {
    ChatEvent::Message(
        ChatMessage::new(
            GROUP,
            from.clone(),
            MessageContent::Sticker(Sticker {
                file_id: format!("sticker-{emoji}"),
                emoji: Some(emoji.to_string()),
            }),
        )
        .replying_to(to.clone()),
    )
}

/// A text message that replies to nobody
pub fn plain_text(from: &ChatUser, text: &str) -> ChatEvent {
    ChatEvent::Message(ChatMessage::new(
        GROUP,
        from.clone(),
        MessageContent::Text(text.to_string()),
    ))
}

pub fn joined(member: &ChatUser) -> ChatEvent {
    ChatEvent::NewMember {
        chat_id: GROUP,
        member: member.clone(),
    }
}

pub fn left(member: &ChatUser) -> ChatEvent {
    ChatEvent::LeftMember {
        chat_id: GROUP,
        member: member.clone(),
    }
}

/// Reputation row as served by `GET /reputations`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationRow {
    pub id: i64,
    pub telegram_id: String,
    pub username: String,
    pub fullname: String,
    pub user_avatar: String,
    pub reputation: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}
