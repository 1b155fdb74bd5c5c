//! Persistence layer for video records.
//!
//! Exposes the [`VideoStore`] seam, its MongoDB and in-memory backends, and
//! the [`repositories::VideoRepo`] operations built on top of it.

pub mod models;
pub mod repositories;
pub mod store;

pub use store::memory::InMemoryVideoStore;
pub use store::mongo::MongoVideoStore;
pub use store::{UpdateOutcome, VideoStore};

use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Client;

/// MongoDB server error code for a unique index violation.
const MONGO_DUPLICATE_KEY: i32 = 11000;

/// Errors raised by a [`VideoStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

impl DbError {
    /// `true` when the write collided with an existing `_id`.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            DbError::DuplicateKey(_) => true,
            DbError::Mongo(err) => matches!(
                err.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(write_err))
                    if write_err.code == MONGO_DUPLICATE_KEY
            ),
        }
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Create a MongoDB client from a connection string.
///
/// The driver connects lazily; use [`health_check`] to verify the server is
/// reachable.
pub async fn create_client(database_url: &str) -> DbResult<Client> {
    let client = Client::with_uri_str(database_url).await?;
    Ok(client)
}

/// Connect to `database_url` and open the video store in `database_name`.
pub async fn connect_store(database_url: &str, database_name: &str) -> DbResult<MongoVideoStore> {
    let client = create_client(database_url).await?;
    tracing::debug!(database = database_name, "Opening video store");
    Ok(MongoVideoStore::new(client.database(database_name)))
}

/// Verify the store is reachable.
pub async fn health_check(store: &dyn VideoStore) -> DbResult<()> {
    store.ping().await
}
