//! The storage seam behind every video operation.
//!
//! Each method maps onto exactly one document-store primitive. Operation
//! logic (read-after-write, update fallback) lives in
//! [`crate::repositories::VideoRepo`], not in the backends.

pub mod memory;
pub mod mongo;

use archive_core::types::RecordId;
use async_trait::async_trait;

use crate::models::video::{UpdateVideo, Video};
use crate::DbResult;

/// Counts reported by a partial update, as the store reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Documents whose `_id` matched the filter.
    pub matched: u64,
    /// Documents whose stored values actually changed.
    pub modified: u64,
}

/// A collection of video documents keyed by string `_id`.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a full document.
    async fn insert(&self, video: &Video) -> DbResult<()>;

    /// Fetch the document with the given `_id`.
    async fn find_by_id(&self, id: &RecordId) -> DbResult<Option<Video>>;

    /// Fetch up to `limit` documents in store-native order.
    async fn list(&self, limit: i64) -> DbResult<Vec<Video>>;

    /// `$set` the supplied fields on the document with the given `_id`.
    async fn update_fields(&self, id: &RecordId, changes: &UpdateVideo)
        -> DbResult<UpdateOutcome>;

    /// Delete the document with the given `_id`, returning the deleted count.
    async fn delete(&self, id: &RecordId) -> DbResult<u64>;

    /// Round-trip to the backend.
    async fn ping(&self) -> DbResult<()>;
}
