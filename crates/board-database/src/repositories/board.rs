//! Board definition repository implementation.

use sqlx::PgPool;

use board_core::error::{AppError, ErrorKind};
use board_core::result::AppResult;
use board_entity::board::BoardInfo;

/// Repository for board definition rows.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    /// Create a new board repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live board by identifier.
    pub async fn find_live(&self, board_id: &str) -> AppResult<Option<BoardInfo>> {
        sqlx::query_as::<_, BoardInfo>(
            "SELECT * FROM board_info WHERE board_id = $1 AND NOT is_deleted",
        )
        .bind(board_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find board", e))
    }
}
