//! Video collection constants.

/// Entity name used in error messages.
pub const ENTITY_VIDEO: &str = "Video";

/// Database used when `MONGODB_DATABASE` is not set.
pub const DEFAULT_DATABASE: &str = "archive";

/// Collection holding every video document.
pub const VIDEOS_COLLECTION: &str = "videos";

/// Hard cap on the number of records returned by a list call.
pub const LIST_LIMIT: i64 = 1000;

// Document keys of the business fields.
pub const FIELD_VIDEO_ID: &str = "videoId";
pub const FIELD_CHANNEL_ID: &str = "channelId";
pub const FIELD_CHANNEL_NAME: &str = "channelName";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_PLATFORM: &str = "platform";
