//! Board post CRUD with the shared ownership policy.

use std::sync::Arc;

use tracing::info;

use board_core::error::AppError;
use board_core::types::pagination::{PageRequest, PageResponse};
use board_core::types::sorting::SortDirection;
use board_database::repositories::{
    AttachmentRepository, BoardRepository, CommentRepository, PostRepository,
};
use board_entity::attachment::Attachment;
use board_entity::board::BoardInfo;
use board_entity::comment::Comment;
use board_entity::post::{CreatePost, Post, PostSortField, UpdatePost};

use super::sanitize::strip_tags;

/// Handles board post operations.
#[derive(Debug, Clone)]
pub struct BoardService {
    /// Board definition repository.
    board_repo: Arc<BoardRepository>,
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// Attachment repository.
    attachment_repo: Arc<AttachmentRepository>,
}

/// Listing parameters for a board.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    /// Pagination window.
    pub page: PageRequest,
    /// Sort column, from the allow-list.
    pub sort: PostSortField,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Data for creating a post.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatePostData {
    /// Post title.
    pub title: String,
    /// Post body (may contain HTML).
    pub contents: Option<String>,
}

/// Partial update of a post. `None` fields are no-ops.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdatePostData {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub contents: Option<String>,
}

/// A post together with its live comments and attachments.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PostDetail {
    /// The post row.
    pub post: Post,
    /// Live comments in posting order.
    pub comments: Vec<Comment>,
    /// Live attachments.
    pub attachments: Vec<Attachment>,
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        post_repo: Arc<PostRepository>,
        comment_repo: Arc<CommentRepository>,
        attachment_repo: Arc<AttachmentRepository>,
    ) -> Self {
        Self {
            board_repo,
            post_repo,
            comment_repo,
            attachment_repo,
        }
    }

    /// Fetches a live board definition.
    pub async fn get_board(&self, board_id: &str) -> Result<BoardInfo, AppError> {
        self.board_repo
            .find_live(board_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board '{board_id}' not found")))
    }

    /// Lists live posts on a board, paginated and ordered.
    pub async fn list_posts(
        &self,
        board_id: &str,
        query: &PostListQuery,
    ) -> Result<PageResponse<Post>, AppError> {
        // The board must exist live before its posts are listed.
        self.get_board(board_id).await?;

        let total = self.post_repo.count_live(board_id).await?;
        let posts = self
            .post_repo
            .list(board_id, &query.page, query.sort, query.direction)
            .await?;

        Ok(PageResponse::new(
            posts,
            query.page.page,
            query.page.page_size,
            total,
        ))
    }

    /// Creates a post on a board. `author` is `None` for anonymous posts,
    /// which then belong to nobody and may be touched by anyone.
    pub async fn create_post(
        &self,
        board_id: &str,
        author: Option<i64>,
        data: CreatePostData,
    ) -> Result<Post, AppError> {
        self.get_board(board_id).await?;

        let plain_contents = data.contents.as_deref().map(strip_tags);

        let post = self
            .post_repo
            .create(&CreatePost {
                board_id: board_id.to_string(),
                author_no: author,
                title: data.title,
                contents: data.contents,
                plain_contents,
            })
            .await?;

        info!(post_no = post.post_no, board_id, "Post created");

        Ok(post)
    }

    /// Fetches a live post with its comments and attachments, bumping the
    /// view counter.
    pub async fn get_post(&self, post_no: i64) -> Result<PostDetail, AppError> {
        let post = self
            .post_repo
            .find_live(post_no)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_no} not found")))?;

        self.post_repo.increment_hit_count(post_no).await?;

        let comments = self.comment_repo.list_live_by_post(post_no).await?;
        let attachments = self.attachment_repo.list_live_by_post(post_no).await?;

        Ok(PostDetail {
            post,
            comments,
            attachments,
        })
    }

    /// Applies a partial update to a post after the ownership check.
    /// A changed body re-derives the tag-stripped rendering.
    pub async fn update_post(
        &self,
        actor: Option<i64>,
        post_no: i64,
        data: UpdatePostData,
    ) -> Result<Post, AppError> {
        let post = self
            .post_repo
            .find_live(post_no)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_no} not found")))?;

        check_owner(post.author_no, actor)?;

        let plain_contents = data.contents.as_deref().map(strip_tags);

        let update = UpdatePost {
            title: data.title,
            contents: data.contents,
            plain_contents,
        };

        if update.is_empty() {
            return Ok(post);
        }

        let updated = self.post_repo.update(post_no, &update).await?;

        info!(post_no, "Post updated");

        Ok(updated)
    }

    /// Soft-deletes a post after the ownership check.
    pub async fn delete_post(&self, actor: Option<i64>, post_no: i64) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_live(post_no)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {post_no} not found")))?;

        check_owner(post.author_no, actor)?;

        self.post_repo.soft_delete(post_no).await?;

        info!(post_no, "Post deleted");

        Ok(())
    }
}

/// The shared ownership policy for mutating operations.
///
/// A row with a non-null owner may only be touched by that owner. A null
/// owner means the row is unowned and any actor — including anonymous
/// ones — may act on it. That open policy comes straight from the
/// original system's anonymous-post semantics; it lives in this single
/// function so a stricter rule has exactly one place to land.
pub fn check_owner(owner: Option<i64>, actor: Option<i64>) -> Result<(), AppError> {
    match owner {
        None => Ok(()),
        Some(owner_no) => match actor {
            Some(actor_no) if actor_no == owner_no => Ok(()),
            _ => Err(AppError::forbidden(
                "No permission to modify this post",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::error::ErrorKind;

    #[test]
    fn test_owner_may_act() {
        assert!(check_owner(Some(5), Some(5)).is_ok());
    }

    #[test]
    fn test_other_member_is_forbidden() {
        let err = check_owner(Some(5), Some(7)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_anonymous_actor_cannot_touch_owned_row() {
        assert!(check_owner(Some(5), None).is_err());
    }

    #[test]
    fn test_unowned_row_is_open_to_anyone() {
        assert!(check_owner(None, Some(7)).is_ok());
        assert!(check_owner(None, None).is_ok());
    }
}
