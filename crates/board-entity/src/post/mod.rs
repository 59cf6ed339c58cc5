//! Board post domain entities.

pub mod model;
pub mod sort;

pub use model::{CreatePost, Post, UpdatePost};
pub use sort::PostSortField;
