//! Board definition entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::{BoardAccess, BoardType};

/// A bulletin board definition row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BoardInfo {
    /// Board identifier (primary key, e.g. `"free"`, `"notice"`).
    pub board_id: String,
    /// Display name of the board.
    pub board_name: String,
    /// Presentation type.
    pub board_type: BoardType,
    /// Minimum access level required to write.
    pub board_access: BoardAccess,
    /// Whether search is enabled on this board.
    pub use_search: bool,
    /// Whether file upload is allowed on this board.
    pub allow_upload: bool,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// When the board was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the board was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}
