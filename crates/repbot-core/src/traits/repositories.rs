//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewReputation, ReputationRecord};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reputation Repository
// ============================================================================

#[async_trait]
pub trait ReputationRepository: Send + Sync {
    /// Find a record by platform user id
    async fn find_by_telegram_id(&self, telegram_id: &str) -> RepoResult<Option<ReputationRecord>>;

    /// List every record, in no particular order
    async fn find_all(&self) -> RepoResult<Vec<ReputationRecord>>;

    /// Insert `new` if no record exists for its telegram id, otherwise add
    /// `delta` to the stored score. Must be atomic per telegram id.
    ///
    /// Returns the record as stored after the operation.
    async fn upsert_adjust(&self, new: &NewReputation, delta: i64) -> RepoResult<ReputationRecord>;

    /// Remove the record for a telegram id. Returns whether one existed.
    async fn delete_by_telegram_id(&self, telegram_id: &str) -> RepoResult<bool>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
