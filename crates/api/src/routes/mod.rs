pub mod health;
pub mod video;
