#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing video record.
    pub fn video_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: crate::videos::ENTITY_VIDEO,
            id: id.into(),
        }
    }
}
