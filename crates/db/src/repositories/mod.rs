//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn VideoStore` as the first argument.

pub mod video_repo;

pub use video_repo::VideoRepo;
