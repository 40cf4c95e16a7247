//! # repbot-core
//!
//! Domain layer containing the reputation record, chat event types, the
//! classifier's action type, and the ports (repository and transport traits).
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChatMessage, ChatUser, FileInfo, LinkButton, MembershipStatus, MessageContent, NewReputation,
    OutgoingMessage, PhotoSize, ReputationRecord, Sticker,
};
pub use error::{DomainError, TransportError};
pub use events::{Action, ChatEvent, IgnoreReason};
pub use traits::{ChatTransport, RepoResult, ReputationRepository, TransportResult};
pub use value_objects::{ChatId, IdParseError, UserId};
