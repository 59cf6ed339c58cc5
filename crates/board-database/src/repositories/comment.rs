//! Comment repository implementation.

use sqlx::PgPool;

use board_core::error::{AppError, ErrorKind};
use board_core::result::AppResult;
use board_entity::comment::Comment;

/// Repository for post comment rows.
///
/// Read-only for now: comment CRUD has no endpoints yet, but post detail
/// responses embed the live comments of a post.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List live comments on a post in posting order.
    pub async fn list_live_by_post(&self, post_no: i64) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE post_no = $1 AND NOT is_deleted \
             ORDER BY comment_no ASC",
        )
        .bind(post_no)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }
}
