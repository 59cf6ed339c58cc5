//! Post repository implementation.

use sqlx::PgPool;

use board_core::error::{AppError, ErrorKind};
use board_core::result::AppResult;
use board_core::types::pagination::PageRequest;
use board_core::types::sorting::SortDirection;
use board_entity::post::{CreatePost, Post, PostSortField, UpdatePost};

/// Repository for board post rows.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live post by primary key.
    pub async fn find_live(&self, post_no: i64) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE post_no = $1 AND NOT is_deleted")
            .bind(post_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// Count live posts on a board.
    pub async fn count_live(&self, board_id: &str) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts WHERE board_id = $1 AND NOT is_deleted",
        )
        .bind(board_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;
        Ok(total as u64)
    }

    /// List live posts on a board, paginated and ordered.
    ///
    /// The ORDER BY column comes exclusively from the `PostSortField`
    /// allow-list, so the formatted fragment can never carry request
    /// input.
    pub async fn list(
        &self,
        board_id: &str,
        page: &PageRequest,
        sort: PostSortField,
        direction: SortDirection,
    ) -> AppResult<Vec<Post>> {
        let query = format!(
            "SELECT * FROM posts WHERE board_id = $1 AND NOT is_deleted \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort.column(),
            direction.as_sql(),
        );

        sqlx::query_as::<_, Post>(&query)
            .bind(board_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Insert a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (board_id, author_no, title, contents, plain_contents) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.board_id)
        .bind(data.author_no)
        .bind(&data.title)
        .bind(&data.contents)
        .bind(&data.plain_contents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Apply a partial update to a live post row.
    pub async fn update(&self, post_no: i64, data: &UpdatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = COALESCE($2, title), \
                              contents = COALESCE($3, contents), \
                              plain_contents = COALESCE($4, plain_contents), \
                              updated_at = NOW() \
             WHERE post_no = $1 AND NOT is_deleted \
             RETURNING *",
        )
        .bind(post_no)
        .bind(&data.title)
        .bind(&data.contents)
        .bind(&data.plain_contents)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {post_no} not found")))
    }

    /// Soft-delete a live post row.
    pub async fn soft_delete(&self, post_no: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET is_deleted = TRUE, deleted_at = NOW() \
             WHERE post_no = $1 AND NOT is_deleted",
        )
        .bind(post_no)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Post {post_no} not found")));
        }
        Ok(())
    }

    /// Bump the view counter of a live post.
    pub async fn increment_hit_count(&self, post_no: i64) -> AppResult<()> {
        sqlx::query(
            "UPDATE posts SET hit_count = hit_count + 1 \
             WHERE post_no = $1 AND NOT is_deleted",
        )
        .bind(post_no)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increment hit count", e)
        })?;
        Ok(())
    }
}
