//! In-process [`VideoStore`] with the same counting semantics as MongoDB.
//!
//! Preserves insertion order, which stands in for the store-native order of
//! a real collection.

use archive_core::types::RecordId;
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{UpdateOutcome, VideoStore};
use crate::models::video::{UpdateVideo, Video};
use crate::{DbError, DbResult};

#[derive(Default)]
pub struct InMemoryVideoStore {
    videos: RwLock<IndexMap<RecordId, Video>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn insert(&self, video: &Video) -> DbResult<()> {
        let mut videos = self.videos.write().await;
        if videos.contains_key(&video.id) {
            return Err(DbError::DuplicateKey(video.id.to_string()));
        }
        videos.insert(video.id.clone(), video.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RecordId) -> DbResult<Option<Video>> {
        Ok(self.videos.read().await.get(id).cloned())
    }

    async fn list(&self, limit: i64) -> DbResult<Vec<Video>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .videos
            .read()
            .await
            .values()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_fields(
        &self,
        id: &RecordId,
        changes: &UpdateVideo,
    ) -> DbResult<UpdateOutcome> {
        let mut videos = self.videos.write().await;
        let Some(video) = videos.get_mut(id) else {
            return Ok(UpdateOutcome::default());
        };
        let modified = u64::from(changes.apply_to(video));
        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, id: &RecordId) -> DbResult<u64> {
        let removed = self.videos.write().await.shift_remove(id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}
