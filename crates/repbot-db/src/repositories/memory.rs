//! In-memory implementation of ReputationRepository
//!
//! Backs tests and local runs without PostgreSQL. Records live in a
//! `DashMap` keyed by telegram id; the entry API holds the shard lock for the
//! whole read-modify-write of `upsert_adjust`.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use repbot_core::entities::{NewReputation, ReputationRecord};
use repbot_core::traits::{RepoResult, ReputationRepository};

/// In-memory reputation store
#[derive(Debug, Clone, Default)]
pub struct MemoryReputationRepository {
    records: Arc<DashMap<String, ReputationRecord>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryReputationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl ReputationRepository for MemoryReputationRepository {
    async fn find_by_telegram_id(&self, telegram_id: &str) -> RepoResult<Option<ReputationRecord>> {
        Ok(self.records.get(telegram_id).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<ReputationRecord>> {
        let mut records: Vec<_> = self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn upsert_adjust(&self, new: &NewReputation, delta: i64) -> RepoResult<ReputationRecord> {
        let now = Utc::now();

        let record = match self.records.entry(new.telegram_id.clone()) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.reputation += delta;
                record.updated_at = now;
                record.clone()
            }
            Entry::Vacant(entry) => {
                let record = new.clone().into_record(self.allocate_id(), now);
                entry.insert(record).value().clone()
            }
        };

        Ok(record)
    }

    async fn delete_by_telegram_id(&self, telegram_id: &str) -> RepoResult<bool> {
        Ok(self.records.remove(telegram_id).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
