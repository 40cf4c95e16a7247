//! Chat entities - transient inputs and outputs of the transport
//!
//! None of these are persisted; they describe what the platform delivered
//! or what the bot wants to send back.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ChatId, UserId};

/// A chat participant as seen on a single event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub is_bot: bool,
}

impl ChatUser {
    /// Create a user with only the required fields
    pub fn new(id: UserId, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            is_bot: false,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().filter(|s| !s.is_empty()) {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// Username or empty string when the platform exposes none
    pub fn username_or_empty(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Display label: first name with an `(@username)` suffix when present
    pub fn mention(&self) -> String {
        match self.username.as_deref().filter(|s| !s.is_empty()) {
            Some(username) => format!("{} (@{})", self.first_name, username),
            None => self.first_name.clone(),
        }
    }
}

/// Sticker payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub emoji: Option<String>,
}

/// Message body. Exactly one kind per message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MessageContent {
    Text(String),
    Sticker(Sticker),
    /// Photos, documents, service messages and anything else
    Other,
}

/// An inbound chat message with its reply context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub chat_id: ChatId,
    pub from: ChatUser,
    pub content: MessageContent,
    /// Author of the message being replied to
    pub reply_to: Option<ChatUser>,
}

impl ChatMessage {
    pub fn new(chat_id: ChatId, from: ChatUser, content: MessageContent) -> Self {
        Self {
            chat_id,
            from,
            content,
            reply_to: None,
        }
    }

    pub fn replying_to(mut self, target: ChatUser) -> Self {
        self.reply_to = Some(target);
        self
    }
}

/// Reply-target presence in the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Left,
}

impl MembershipStatus {
    /// Map a raw platform status string.
    ///
    /// Only `left` counts as departed; `kicked`, `restricted` and the rest
    /// are reported as active.
    pub fn from_platform(status: &str) -> Self {
        if status == "left" {
            Self::Left
        } else {
            Self::Active
        }
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// One size variant of a profile photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

/// File metadata returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_id: String,
    pub file_path: Option<String>,
}

/// External link control attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

/// Message to deliver into a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub link: Option<LinkButton>,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.link = Some(LinkButton {
            text: text.into(),
            url: url.into(),
        });
        self
    }
}
