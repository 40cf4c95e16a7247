//! Test doubles for the service layer
//!
//! Compiled for this crate's unit tests and, with the `testing` feature,
//! for the workspace integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use repbot_core::entities::{FileInfo, MembershipStatus, OutgoingMessage, PhotoSize};
use repbot_core::traits::{ChatTransport, TransportResult};
use repbot_core::value_objects::{ChatId, UserId};
use repbot_core::TransportError;
use repbot_db::MemoryReputationRepository;

use super::context::{BotSettings, ServiceContext};

/// Base of every URL returned by [`FakeTransport::file_url`]
pub const FILE_BASE_URL: &str = "https://files.test";

// A handler that panics mid-test must not wedge the double for later events
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records sent messages and answers lookups from canned data
#[derive(Default)]
pub struct FakeTransport {
    sent: Mutex<Vec<(ChatId, OutgoingMessage)>>,
    statuses: Mutex<HashMap<UserId, String>>,
    photos: Mutex<HashMap<UserId, Vec<Vec<PhotoSize>>>>,
    failing_lookups: Mutex<HashSet<UserId>>,
    panicking_lookups: Mutex<HashSet<UserId>>,
    fail_sends: AtomicBool,
    fail_files: AtomicBool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(ChatId, OutgoingMessage)> {
        lock(&self.sent).clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, m)| m.text).collect()
    }

    pub fn clear_sent(&self) {
        lock(&self.sent).clear();
    }

    /// Report the platform status string `status` for `user_id`
    pub fn set_status(&self, user_id: UserId, status: &str) {
        lock(&self.statuses).insert(user_id, status.to_string());
    }

    /// Profile photos for `user_id`, newest first, each a list of size file ids
    pub fn set_photos(&self, user_id: UserId, photos: &[&[&str]]) {
        let photos = photos
            .iter()
            .map(|sizes| {
                sizes
                    .iter()
                    .map(|id| PhotoSize {
                        file_id: (*id).to_string(),
                        width: 160,
                        height: 160,
                    })
                    .collect()
            })
            .collect();
        lock(&self.photos).insert(user_id, photos);
    }

    /// Membership lookups for `user_id` return an API error
    pub fn fail_member_lookup(&self, user_id: UserId) {
        lock(&self.failing_lookups).insert(user_id);
    }

    /// Membership lookups for `user_id` panic
    pub fn panic_on_member_lookup(&self, user_id: UserId) {
        lock(&self.panicking_lookups).insert(user_id);
    }

    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    pub fn fail_files(&self) {
        self.fail_files.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn send_message(&self, chat_id: ChatId, message: &OutgoingMessage) -> TransportResult<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransportError::api(403, "Forbidden: bot was kicked"));
        }
        lock(&self.sent).push((chat_id, message.clone()));
        Ok(())
    }

    async fn get_chat_member(
        &self,
        _chat_id: ChatId,
        user_id: UserId,
    ) -> TransportResult<MembershipStatus> {
        let panics = lock(&self.panicking_lookups).contains(&user_id);
        if panics {
            panic!("member lookup for {user_id} blew up");
        }
        let fails = lock(&self.failing_lookups).contains(&user_id);
        if fails {
            return Err(TransportError::api(400, "Bad Request: user not found"));
        }

        let statuses = lock(&self.statuses);
        let status = statuses.get(&user_id).map_or("member", String::as_str);
        Ok(MembershipStatus::from_platform(status))
    }

    async fn get_user_profile_photos(&self, user_id: UserId) -> TransportResult<Vec<Vec<PhotoSize>>> {
        Ok(lock(&self.photos).get(&user_id).cloned().unwrap_or_default())
    }

    async fn get_file(&self, file_id: &str) -> TransportResult<FileInfo> {
        if self.fail_files.load(Ordering::SeqCst) {
            return Err(TransportError::Http("connection reset".to_string()));
        }
        Ok(FileInfo {
            file_id: file_id.to_string(),
            file_path: Some(format!("photos/{file_id}.jpg")),
        })
    }

    fn file_url(&self, file_path: &str) -> String {
        format!("{FILE_BASE_URL}/{file_path}")
    }
}

/// Context over an empty in-memory store
pub fn test_context(transport: Arc<FakeTransport>) -> ServiceContext {
    ServiceContext::new(
        Arc::new(MemoryReputationRepository::new()),
        transport,
        BotSettings::new("MainBot", "https://dashboard.test"),
    )
}
