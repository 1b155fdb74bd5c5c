//! Repository for the `videos` collection.

use archive_core::types::RecordId;
use archive_core::videos::LIST_LIMIT;

use crate::models::video::{CreateVideo, UpdateVideo, Video};
use crate::store::VideoStore;
use crate::DbResult;

/// Provides data access for video records.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video under `id` and read it back.
    ///
    /// Returns `None` only if the document vanished between the insert and
    /// the read (a concurrent delete).
    pub async fn create(
        store: &dyn VideoStore,
        id: RecordId,
        input: &CreateVideo,
    ) -> DbResult<Option<Video>> {
        let video = Video::new(id, input);
        store.insert(&video).await?;
        store.find_by_id(&video.id).await
    }

    /// List up to [`LIST_LIMIT`] videos in store-native order.
    pub async fn list(store: &dyn VideoStore) -> DbResult<Vec<Video>> {
        store.list(LIST_LIMIT).await
    }

    /// Find a video by its ID.
    pub async fn find_by_id(store: &dyn VideoStore, id: &RecordId) -> DbResult<Option<Video>> {
        store.find_by_id(id).await
    }

    /// Partially update a video.
    ///
    /// Only non-null fields are written. When nothing was written (empty
    /// update, no match, or values identical to the stored ones) the current
    /// document is returned as-is, so repeating an update is not an error.
    /// Returns `None` if no document has this ID.
    pub async fn update(
        store: &dyn VideoStore,
        id: &RecordId,
        input: &UpdateVideo,
    ) -> DbResult<Option<Video>> {
        if !input.is_empty() {
            let outcome = store.update_fields(id, input).await?;
            if outcome.modified == 1 {
                if let Some(video) = store.find_by_id(id).await? {
                    return Ok(Some(video));
                }
            }
        }

        store.find_by_id(id).await
    }

    /// Delete a video. Returns `true` if exactly one document was removed.
    pub async fn delete(store: &dyn VideoStore, id: &RecordId) -> DbResult<bool> {
        let deleted = store.delete(id).await?;
        Ok(deleted == 1)
    }
}
