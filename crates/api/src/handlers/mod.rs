//! Request handlers.
//!
//! Handlers delegate to the repositories in `archive_db` and map errors via
//! [`crate::error::AppError`].

pub mod video;
