//! Attachment entity model.
//!
//! Upload handling is out of scope; attachments are read-only metadata
//! rows listed alongside a post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attachment {
    /// Generated attachment number (primary key).
    pub attachment_no: i64,
    /// The post this file belongs to.
    pub post_no: i64,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// Storage path.
    pub file_path: String,
    /// Original file name.
    pub file_name: String,
    /// When the attachment was created.
    pub created_at: DateTime<Utc>,
    /// When the attachment row was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the attachment was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}
