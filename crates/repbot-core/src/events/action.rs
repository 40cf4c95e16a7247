//! Classifier verdicts

use std::fmt;

use crate::entities::ChatUser;

/// What an inbound message means for the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Thank(ChatUser),
    Unthank(ChatUser),
    Ignore(IgnoreReason),
}

impl Action {
    /// Score delta applied to an existing record
    pub fn delta(&self) -> i64 {
        match self {
            Self::Thank(_) => 1,
            Self::Unthank(_) => -1,
            Self::Ignore(_) => 0,
        }
    }
}

/// Why a message produced no mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoReplyTarget,
    TargetLeft,
    UnrecognizedSticker,
    TargetIsBot,
    SelfReply,
    NoGratitude,
    NoContent,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoReplyTarget => "no_reply_target",
            Self::TargetLeft => "target_left",
            Self::UnrecognizedSticker => "unrecognized_sticker",
            Self::TargetIsBot => "target_is_bot",
            Self::SelfReply => "self_reply",
            Self::NoGratitude => "no_gratitude",
            Self::NoContent => "no_content",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
