//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use board_entity::attachment::Attachment;
use board_entity::board::BoardInfo;
use board_entity::comment::Comment;
use board_entity::member::Member;
use board_entity::post::Post;
use board_service::board::PostDetail;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Member summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// Member number.
    pub member_no: i64,
    /// Login identifier.
    pub member_id: String,
    /// Display name.
    pub member_name: String,
    /// Email.
    pub member_email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            member_no: member.member_no,
            member_id: member.member_id,
            member_name: member.member_name,
            member_email: member.member_email,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Login and refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated member.
    pub member: MemberResponse,
}

/// Board definition response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Board identifier.
    pub board_id: String,
    /// Display name.
    pub board_name: String,
    /// Board type code.
    pub board_type: String,
    /// Write-access policy code.
    pub board_access: String,
    /// Whether the board is searchable.
    pub use_search: bool,
    /// Whether file upload is allowed.
    pub allow_upload: bool,
}

impl From<BoardInfo> for BoardResponse {
    fn from(board: BoardInfo) -> Self {
        Self {
            board_id: board.board_id,
            board_name: board.board_name,
            board_type: board.board_type.to_string(),
            board_access: board.board_access.to_string(),
            use_search: board.use_search,
            allow_upload: board.allow_upload,
        }
    }
}

/// Post summary for list and detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post number.
    pub post_no: i64,
    /// Board the post lives on.
    pub board_id: String,
    /// Author member number; `None` for anonymous posts.
    pub author_no: Option<i64>,
    /// View counter.
    pub hit_count: i64,
    /// Title.
    pub title: String,
    /// Body, HTML included.
    pub contents: Option<String>,
    /// Body with tags stripped.
    pub plain_contents: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_no: post.post_no,
            board_id: post.board_id,
            author_no: post.author_no,
            hit_count: post.hit_count,
            title: post.title,
            contents: post.contents,
            plain_contents: post.plain_contents,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A post with its live comments and attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    /// The post itself.
    pub post: PostResponse,
    /// Live comments in posting order.
    pub comments: Vec<CommentResponse>,
    /// Live attachments.
    pub attachments: Vec<AttachmentResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            comments: detail.comments.into_iter().map(Into::into).collect(),
            attachments: detail.attachments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Comment summary. Never carries the guest password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment number.
    pub comment_no: i64,
    /// Post the comment belongs to.
    pub post_no: i64,
    /// Author member number; `None` for guest comments.
    pub author_no: Option<i64>,
    /// Parent comment for replies.
    pub parent_comment_no: Option<i64>,
    /// Guest display name.
    pub guest_name: Option<String>,
    /// Comment body.
    pub contents: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            comment_no: comment.comment_no,
            post_no: comment.post_no,
            author_no: comment.author_no,
            parent_comment_no: comment.parent_comment_no,
            guest_name: comment.guest_name,
            contents: comment.contents,
            created_at: comment.created_at,
        }
    }
}

/// Attachment summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentResponse {
    /// Attachment number.
    pub attachment_no: i64,
    /// Post the attachment belongs to.
    pub post_no: i64,
    /// MIME type.
    pub mime_type: String,
    /// Original file name.
    pub file_name: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            attachment_no: attachment.attachment_no,
            post_no: attachment.post_no,
            mime_type: attachment.mime_type,
            file_name: attachment.file_name,
            created_at: attachment.created_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
