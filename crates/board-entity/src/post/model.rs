//! Board post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post on a bulletin board.
///
/// `author_no` is nullable: an anonymous visitor may write to boards that
/// allow it, and such a post carries no owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Generated post number (primary key).
    pub post_no: i64,
    /// The board this post belongs to.
    pub board_id: String,
    /// Author's member number; `None` for anonymous posts.
    pub author_no: Option<i64>,
    /// View counter.
    pub hit_count: i64,
    /// Post title.
    pub title: String,
    /// Post body (may contain HTML).
    pub contents: Option<String>,
    /// Body with HTML tags stripped, for search and previews.
    pub plain_contents: Option<String>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the post was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether the post carries an owner at all.
    pub fn is_anonymous(&self) -> bool {
        self.author_no.is_none()
    }
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Target board.
    pub board_id: String,
    /// Author's member number; `None` for anonymous posts.
    pub author_no: Option<i64>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub contents: Option<String>,
    /// Pre-computed tag-stripped body.
    pub plain_contents: Option<String>,
}

/// Partial update of an existing post. `None` fields are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub contents: Option<String>,
    /// Re-computed tag-stripped body; set whenever `contents` changes.
    pub plain_contents: Option<String>,
}

impl UpdatePost {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.contents.is_none()
    }
}
