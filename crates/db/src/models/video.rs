//! Video document model and request DTOs.
//!
//! Field names are camelCase on the wire and in the store; the identifier is
//! stored under `_id` as a plain string.

use archive_core::types::RecordId;
use archive_core::videos::{
    FIELD_CHANNEL_ID, FIELD_CHANNEL_NAME, FIELD_PLATFORM, FIELD_TITLE, FIELD_VIDEO_ID,
};
use bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A document from the `videos` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "65f1c0ffee0000000000abcd")]
    pub id: RecordId,
    #[schema(example = "4bLd42hHc2k")]
    pub video_id: String,
    #[schema(example = "@kjvbiblereadalong")]
    pub channel_id: String,
    #[schema(example = "KJV Bible Read Along")]
    pub channel_name: String,
    #[schema(example = "Bible Book 18. Job Complete - King James 1611 KJV Read Along")]
    pub title: String,
    #[schema(example = "youtube")]
    pub platform: String,
}

impl Video {
    /// Build the document to insert for a create request.
    pub fn new(id: RecordId, input: &CreateVideo) -> Self {
        Self {
            id,
            video_id: input.video_id.clone(),
            channel_id: input.channel_id.clone(),
            channel_name: input.channel_name.clone(),
            title: input.title.clone(),
            platform: input.platform.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a video. Every field is required.
///
/// A client-supplied `_id` is ignored; the service always mints its own.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideo {
    #[schema(example = "4bLd42hHc2k")]
    pub video_id: String,
    #[schema(example = "@kjvbiblereadalong")]
    pub channel_id: String,
    #[schema(example = "KJV Bible Read Along")]
    pub channel_name: String,
    #[schema(example = "Bible Book 18. Job Complete - King James 1611 KJV Read Along")]
    pub title: String,
    #[schema(example = "youtube")]
    pub platform: String,
}

/// DTO for partially updating a video.
///
/// Absent and `null` fields are both left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideo {
    #[schema(example = "4bLd42hHc2k")]
    pub video_id: Option<String>,
    #[schema(example = "@kjvbiblereadalong")]
    pub channel_id: Option<String>,
    #[schema(example = "KJV Bible Read Along")]
    pub channel_name: Option<String>,
    #[schema(example = "Bible Book 18. Job Complete - King James 1611 KJV Read Along")]
    pub title: Option<String>,
    #[schema(example = "youtube")]
    pub platform: Option<String>,
}

impl UpdateVideo {
    /// The supplied fields as `(document key, value)` pairs.
    pub fn changes(&self) -> Vec<(&'static str, &str)> {
        [
            (FIELD_VIDEO_ID, &self.video_id),
            (FIELD_CHANNEL_ID, &self.channel_id),
            (FIELD_CHANNEL_NAME, &self.channel_name),
            (FIELD_TITLE, &self.title),
            (FIELD_PLATFORM, &self.platform),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// `true` when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// The body of a `$set` operator holding only the supplied fields.
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        for (key, value) in self.changes() {
            set.insert(key, value);
        }
        set
    }

    /// Apply the supplied fields to `video` in place.
    ///
    /// Returns `true` if any stored value actually changed.
    pub fn apply_to(&self, video: &mut Video) -> bool {
        let mut changed = false;
        let targets = [
            (&self.video_id, &mut video.video_id),
            (&self.channel_id, &mut video.channel_id),
            (&self.channel_name, &mut video.channel_name),
            (&self.title, &mut video.title),
            (&self.platform, &mut video.platform),
        ];
        for (new, current) in targets {
            if let Some(new) = new {
                if current.as_str() != new.as_str() {
                    current.clone_from(new);
                    changed = true;
                }
            }
        }
        changed
    }
}
