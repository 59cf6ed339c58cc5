//! Allow-listed sortable columns for post listings.
//!
//! The ORDER BY column for a listing comes from request input, so it is
//! resolved through this closed enum instead of being spliced into SQL as
//! a raw string. Unknown field names are a validation error, never a
//! query against an arbitrary column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use board_core::AppError;

/// Columns a post listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostSortField {
    /// Post number (insertion order).
    #[default]
    PostNo,
    /// Post title, lexicographic.
    Title,
    /// View counter.
    HitCount,
    /// Creation timestamp.
    CreatedAt,
}

impl PostSortField {
    /// Return the SQL column this field maps to.
    pub fn column(&self) -> &'static str {
        match self {
            Self::PostNo => "post_no",
            Self::Title => "title",
            Self::HitCount => "hit_count",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for PostSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for PostSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post_no" => Ok(Self::PostNo),
            "title" => Ok(Self::Title),
            "hit_count" => Ok(Self::HitCount),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(AppError::validation(format!(
                "Invalid sort field: '{s}'. Expected one of: post_no, title, hit_count, created_at"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fields_resolve() {
        assert_eq!(
            "hit_count".parse::<PostSortField>().unwrap(),
            PostSortField::HitCount
        );
        assert_eq!(PostSortField::HitCount.column(), "hit_count");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = "password_hash".parse::<PostSortField>().unwrap_err();
        assert_eq!(err.kind, board_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_default_is_post_no() {
        assert_eq!(PostSortField::default(), PostSortField::PostNo);
    }
}
