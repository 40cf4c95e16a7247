//! Domain entities - the ledger record and transient chat objects

mod chat;
mod reputation;

pub use chat::{
    ChatMessage, ChatUser, FileInfo, LinkButton, MembershipStatus, MessageContent,
    OutgoingMessage, PhotoSize, Sticker,
};
pub use reputation::{NewReputation, ReputationRecord};
