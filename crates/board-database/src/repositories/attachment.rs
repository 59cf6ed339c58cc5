//! Attachment repository implementation.

use sqlx::PgPool;

use board_core::error::{AppError, ErrorKind};
use board_core::result::AppResult;
use board_entity::attachment::Attachment;

/// Repository for post attachment rows. Read-only: upload handling is
/// out of scope, so rows only ever arrive through external tooling.
#[derive(Debug, Clone)]
pub struct AttachmentRepository {
    pool: PgPool,
}

impl AttachmentRepository {
    /// Create a new attachment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List live attachments on a post.
    pub async fn list_live_by_post(&self, post_no: i64) -> AppResult<Vec<Attachment>> {
        sqlx::query_as::<_, Attachment>(
            "SELECT * FROM attachments WHERE post_no = $1 AND NOT is_deleted \
             ORDER BY attachment_no ASC",
        )
        .bind(post_no)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attachments", e))
    }
}
