//! MongoDB-backed [`VideoStore`].

use archive_core::types::RecordId;
use archive_core::videos::VIDEOS_COLLECTION;
use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::{UpdateOutcome, VideoStore};
use crate::models::video::{UpdateVideo, Video};
use crate::DbResult;

/// Stores videos in the `videos` collection of a MongoDB database.
///
/// Cheap to clone; the driver pools connections internally.
#[derive(Clone)]
pub struct MongoVideoStore {
    database: Database,
    collection: Collection<Video>,
}

impl MongoVideoStore {
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<Video>(VIDEOS_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl VideoStore for MongoVideoStore {
    async fn insert(&self, video: &Video) -> DbResult<()> {
        self.collection.insert_one(video).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &RecordId) -> DbResult<Option<Video>> {
        let video = self
            .collection
            .find_one(doc! { "_id": id.as_str() })
            .await?;
        Ok(video)
    }

    async fn list(&self, limit: i64) -> DbResult<Vec<Video>> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let videos: Vec<Video> = cursor.try_collect().await?;
        Ok(videos)
    }

    async fn update_fields(
        &self,
        id: &RecordId,
        changes: &UpdateVideo,
    ) -> DbResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.as_str() },
                doc! { "$set": changes.set_document() },
            )
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &RecordId) -> DbResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_str() })
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> DbResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
