use std::sync::Arc;

use archive_db::VideoStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store handle is opened once at startup and shared
/// by every request for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Video document store.
    pub store: Arc<dyn VideoStore>,
}
