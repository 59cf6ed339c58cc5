//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use board_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use board_entity::board::{BoardAccess, BoardType};

    const INIT_SQL: &str = include_str!("../../../migrations/0001_init.sql");

    fn enum_definition(type_name: &str) -> &'static str {
        let start = INIT_SQL
            .find(&format!("CREATE TYPE {type_name} AS ENUM"))
            .unwrap_or_else(|| panic!("migration does not define {type_name}"));
        let end = INIT_SQL[start..]
            .find(';')
            .expect("unterminated CREATE TYPE");
        &INIT_SQL[start..start + end]
    }

    // Rows decode through the sqlx enum derives, which reject any label
    // outside their rename set; every Rust variant must therefore exist
    // verbatim in the DDL, defaults included.
    #[test]
    fn test_board_type_labels_match_ddl() {
        let ddl = enum_definition("board_type");
        for kind in [BoardType::List, BoardType::Gallery] {
            assert!(
                ddl.contains(&format!("'{}'", kind.as_str())),
                "board_type enum is missing '{}'",
                kind.as_str()
            );
        }
        assert!(INIT_SQL.contains("board_type NOT NULL DEFAULT 'list'"));
    }

    #[test]
    fn test_board_access_labels_match_ddl() {
        let ddl = enum_definition("board_access");
        for access in [BoardAccess::Admin, BoardAccess::Member, BoardAccess::Everyone] {
            assert!(
                ddl.contains(&format!("'{}'", access.as_str())),
                "board_access enum is missing '{}'",
                access.as_str()
            );
        }
        assert!(INIT_SQL.contains("board_access NOT NULL DEFAULT 'everyone'"));
    }
}
