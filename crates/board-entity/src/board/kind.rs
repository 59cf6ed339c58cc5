//! Board presentation type and access-level enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a board renders its posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "board_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    /// Plain list of posts.
    List,
    /// Thumbnail gallery.
    Gallery,
}

impl BoardType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Gallery => "gallery",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who may write to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "board_access", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoardAccess {
    /// Administrators only.
    Admin,
    /// Logged-in members.
    Member,
    /// Anyone, including anonymous visitors.
    Everyone,
}

impl BoardAccess {
    /// Return the access level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Everyone => "everyone",
        }
    }
}

impl fmt::Display for BoardAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BoardAccess {
    type Err = board_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "everyone" => Ok(Self::Everyone),
            _ => Err(board_core::AppError::validation(format!(
                "Invalid board access level: '{s}'. Expected one of: admin, member, everyone"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_from_str() {
        assert_eq!("member".parse::<BoardAccess>().unwrap(), BoardAccess::Member);
        assert_eq!(
            "EVERYONE".parse::<BoardAccess>().unwrap(),
            BoardAccess::Everyone
        );
        assert!("anyone".parse::<BoardAccess>().is_err());
    }
}
