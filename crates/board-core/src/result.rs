//! Convenience result type alias for Maru Board.

use crate::error::AppError;

/// A specialized `Result` type for board operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
