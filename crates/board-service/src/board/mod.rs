//! Board post operations.

pub mod sanitize;
pub mod service;

pub use service::{BoardService, CreatePostData, PostDetail, PostListQuery, UpdatePostData};
