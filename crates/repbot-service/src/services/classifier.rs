//! Event classifier
//!
//! Turns an inbound message plus its reply-target status into an [`Action`].
//! Pure: no I/O, so the engine resolves membership before calling it.

use repbot_core::entities::{ChatMessage, ChatUser, MembershipStatus, MessageContent};
use repbot_core::events::{Action, IgnoreReason};

pub const THUMBS_UP: &str = "👍";
pub const THUMBS_DOWN: &str = "👎";

/// Normalized tokens that count as thanks on the text path
pub const GRATITUDE_WORDS: [&str; 6] = [
    "спасибо",
    "спс",
    "благодарю",
    "заработало",
    "сработало",
    THUMBS_UP,
];

/// Characters stripped from every token before matching
const STRIPPED_PUNCTUATION: &[char] = &[
    '&', '/', '\\', '#', ',', '+', '(', ')', '$', '~', '%', '.', '\'', '"', ':', '*', '?', '!',
    '<', '>', '{', '}',
];

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    bot_username: String,
}

impl Classifier {
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            bot_username: bot_username.into().trim_start_matches('@').to_string(),
        }
    }

    /// Decide what a message means for the ledger.
    ///
    /// `target_status` is the reply-target's membership, looked up only when
    /// the message is a reply.
    pub fn classify(
        &self,
        message: &ChatMessage,
        target_status: Option<MembershipStatus>,
    ) -> Action {
        let Some(target) = message.reply_to.as_ref() else {
            return Action::Ignore(IgnoreReason::NoReplyTarget);
        };

        if target_status.is_some_and(|status| status.is_left()) {
            return Action::Ignore(IgnoreReason::TargetLeft);
        }

        match &message.content {
            // Stickers skip the self and bot checks
            MessageContent::Sticker(sticker) => match sticker.emoji.as_deref() {
                Some(THUMBS_UP) => Action::Thank(target.clone()),
                Some(THUMBS_DOWN) => Action::Unthank(target.clone()),
                _ => Action::Ignore(IgnoreReason::UnrecognizedSticker),
            },
            MessageContent::Text(text) => {
                if self.is_bot(target) {
                    Action::Ignore(IgnoreReason::TargetIsBot)
                } else if is_self_reply(&message.from, target) {
                    Action::Ignore(IgnoreReason::SelfReply)
                } else if contains_gratitude(text) {
                    Action::Thank(target.clone())
                } else {
                    Action::Ignore(IgnoreReason::NoGratitude)
                }
            }
            MessageContent::Other => Action::Ignore(IgnoreReason::NoContent),
        }
    }

    fn is_bot(&self, user: &ChatUser) -> bool {
        !self.bot_username.is_empty()
            && user
                .username
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(&self.bot_username))
    }
}

/// Same account, or the same username.
///
/// Two users without a username compare equal, so text replies between
/// them never count.
fn is_self_reply(from: &ChatUser, target: &ChatUser) -> bool {
    from.id == target.id || from.username == target.username
}

/// Lower-case, strip punctuation and split into tokens
pub fn normalize_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(|word| {
        word.to_lowercase()
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect()
    })
}

pub fn contains_gratitude(text: &str) -> bool {
    normalize_tokens(text).any(|token| GRATITUDE_WORDS.contains(&token.as_str()))
}
