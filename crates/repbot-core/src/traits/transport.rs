//! Chat transport trait (port) - outbound commands to the chat platform

use async_trait::async_trait;

use crate::entities::{FileInfo, MembershipStatus, OutgoingMessage, PhotoSize};
use crate::error::TransportError;
use crate::value_objects::{ChatId, UserId};

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver a message into a chat
    async fn send_message(&self, chat_id: ChatId, message: &OutgoingMessage) -> TransportResult<()>;

    /// Current membership status of a user in a chat
    async fn get_chat_member(&self, chat_id: ChatId, user_id: UserId)
        -> TransportResult<MembershipStatus>;

    /// Profile photos of a user, newest first; each photo lists its sizes
    async fn get_user_profile_photos(&self, user_id: UserId) -> TransportResult<Vec<Vec<PhotoSize>>>;

    /// Resolve a file id to its download path
    async fn get_file(&self, file_id: &str) -> TransportResult<FileInfo>;

    /// Public download URL for a resolved file path
    fn file_url(&self, file_path: &str) -> String;
}
