//! Comment entity model.
//!
//! Comment CRUD has no endpoints yet; the model exists because post detail
//! responses embed the live comments of a post and the soft-delete
//! convention covers this table like any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment on a post. Supports one level of threading via
/// `parent_comment_no` and anonymous authorship via the guest fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Generated comment number (primary key).
    pub comment_no: i64,
    /// The post this comment belongs to.
    pub post_no: i64,
    /// Author's member number; `None` for guest comments.
    pub author_no: Option<i64>,
    /// Parent comment for threaded replies.
    pub parent_comment_no: Option<i64>,
    /// Display name supplied by a guest author.
    pub guest_name: Option<String>,
    /// Password hash a guest uses to manage their own comment.
    #[serde(skip_serializing)]
    pub guest_password_hash: Option<String>,
    /// Comment body.
    pub contents: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the comment was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}
