//! Telegram Bot API client
//!
//! A thin JSON-over-HTTPS client. Implements [`ChatTransport`] for the
//! engine and [`UpdateSource`] for the poller.

use std::time::Duration;

use async_trait::async_trait;
use repbot_core::entities::{FileInfo, MembershipStatus, OutgoingMessage, PhotoSize};
use repbot_core::traits::{ChatTransport, TransportResult};
use repbot_core::value_objects::{ChatId, UserId};
use repbot_core::TransportError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::types::{
    ApiResponse, ChatMember, File, GetChatMemberRequest, GetFileRequest, GetUpdatesRequest,
    GetUserProfilePhotosRequest, InlineKeyboardButton, InlineKeyboardMarkup, SendMessageRequest,
    Update, User, UserProfilePhotos,
};
use crate::poller::UpdateSource;

/// Extra time on top of the long-poll timeout before the HTTP call gives up
const REQUEST_GRACE: Duration = Duration::from_secs(10);

/// Update kinds the bot subscribes to
const ALLOWED_UPDATES: &[&str] = &["message"];

#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a client. `poll_timeout` bounds the longest call (`getUpdates`).
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        poll_timeout: Duration,
    ) -> TransportResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + REQUEST_GRACE)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Call a Bot API method with a JSON body
    async fn call<B, T>(&self, method: &str, body: &B) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // URLs embed the token; strip them from every error
        let response = self
            .http
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url().to_string()))?;

        let status = response.status();
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(format!("{method} ({status}): {}", e.without_url())))?;

        envelope.into_result()
    }

    /// Identity of the bot itself
    pub async fn get_me(&self) -> TransportResult<User> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-poll for updates after `offset`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> TransportResult<Vec<Update>> {
        let body = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: ALLOWED_UPDATES,
        };
        self.call("getUpdates", &body).await
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"***")
            .finish()
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    #[instrument(skip(self, message))]
    async fn send_message(&self, chat_id: ChatId, message: &OutgoingMessage) -> TransportResult<()> {
        let reply_markup = message.link.as_ref().map(|link| InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: &link.text,
                url: &link.url,
            }]],
        });

        let body = SendMessageRequest {
            chat_id: chat_id.into_inner(),
            text: &message.text,
            reply_markup,
        };

        let _: serde_json::Value = self.call("sendMessage", &body).await?;
        debug!("sendMessage ok");
        Ok(())
    }

    async fn get_chat_member(
        &self,
        chat_id: ChatId,
        user_id: UserId,
    ) -> TransportResult<MembershipStatus> {
        let body = GetChatMemberRequest {
            chat_id: chat_id.into_inner(),
            user_id: user_id.into_inner(),
        };
        let member: ChatMember = self.call("getChatMember", &body).await?;
        Ok(MembershipStatus::from_platform(&member.status))
    }

    async fn get_user_profile_photos(&self, user_id: UserId) -> TransportResult<Vec<Vec<PhotoSize>>> {
        let body = GetUserProfilePhotosRequest {
            user_id: user_id.into_inner(),
            limit: 1,
        };
        let photos: UserProfilePhotos = self.call("getUserProfilePhotos", &body).await?;

        Ok(photos
            .photos
            .into_iter()
            .map(|sizes| {
                sizes
                    .into_iter()
                    .map(|size| PhotoSize {
                        file_id: size.file_id,
                        width: size.width,
                        height: size.height,
                    })
                    .collect()
            })
            .collect())
    }

    async fn get_file(&self, file_id: &str) -> TransportResult<FileInfo> {
        let file: File = self.call("getFile", &GetFileRequest { file_id }).await?;
        Ok(FileInfo {
            file_id: file.file_id,
            file_path: file.file_path,
        })
    }

    fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_url, self.token, file_path)
    }
}

#[async_trait]
impl UpdateSource for TelegramClient {
    async fn fetch_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> TransportResult<Vec<Update>> {
        self.get_updates(offset, timeout_secs).await
    }
}
