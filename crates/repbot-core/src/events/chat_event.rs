//! Chat events delivered by the transport

use serde::{Deserialize, Serialize};

use crate::entities::{ChatMessage, ChatUser};
use crate::value_objects::ChatId;

/// All events the engine reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatEvent {
    /// One or more users joined; `member` is the first of them
    NewMember { chat_id: ChatId, member: ChatUser },
    LeftMember { chat_id: ChatId, member: ChatUser },
    Message(ChatMessage),
    /// The event subscription failed; carries the rendered cause
    PollingError { cause: String },
}

impl ChatEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::NewMember { .. } => "NEW_MEMBER",
            Self::LeftMember { .. } => "LEFT_MEMBER",
            Self::Message(_) => "MESSAGE",
            Self::PollingError { .. } => "POLLING_ERROR",
        }
    }

    /// Chat the event originated from, if any
    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Self::NewMember { chat_id, .. } | Self::LeftMember { chat_id, .. } => Some(*chat_id),
            Self::Message(msg) => Some(msg.chat_id),
            Self::PollingError { .. } => None,
        }
    }
}
