//! Bot API objects → domain chat events

use repbot_core::entities::{ChatMessage, ChatUser, MessageContent, Sticker};
use repbot_core::events::ChatEvent;
use repbot_core::value_objects::{ChatId, UserId};

use super::types::{Message, Update, User};

impl From<User> for ChatUser {
    fn from(user: User) -> Self {
        Self {
            id: UserId::new(user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            is_bot: user.is_bot,
        }
    }
}

/// Translate one update into at most one event.
///
/// Membership service messages win over the plain message path; messages
/// without a sender (channel posts) are dropped.
pub fn update_to_event(update: Update) -> Option<ChatEvent> {
    let mut message = update.message?;
    let chat_id = ChatId::new(message.chat.id);

    if let Some(member) = message
        .new_chat_members
        .as_ref()
        .and_then(|members| members.first())
    {
        return Some(ChatEvent::NewMember {
            chat_id,
            member: member.clone().into(),
        });
    }

    if let Some(member) = message.left_chat_member.take() {
        return Some(ChatEvent::LeftMember {
            chat_id,
            member: member.into(),
        });
    }

    message_to_chat_message(message).map(ChatEvent::Message)
}

fn message_to_chat_message(message: Message) -> Option<ChatMessage> {
    let chat_id = ChatId::new(message.chat.id);
    let from = ChatUser::from(message.from?);

    let content = match (message.text, message.sticker) {
        (Some(text), _) => MessageContent::Text(text),
        (None, Some(sticker)) => MessageContent::Sticker(Sticker {
            file_id: sticker.file_id,
            emoji: sticker.emoji,
        }),
        (None, None) => MessageContent::Other,
    };

    let reply_to = message
        .reply_to_message
        .and_then(|reply| reply.from)
        .map(ChatUser::from);

    Some(ChatMessage {
        chat_id,
        from,
        content,
        reply_to,
    })
}
