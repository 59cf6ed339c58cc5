//! Member repository implementation.

use sqlx::PgPool;

use board_core::error::{AppError, ErrorKind};
use board_core::result::AppResult;
use board_entity::member::{CreateMember, Member, UpdateMember};

/// Repository for member rows.
///
/// All lookups filter out soft-deleted rows; a deleted member is
/// indistinguishable from an absent one at this layer.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live member by primary key.
    pub async fn find_live_by_no(&self, member_no: i64) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE member_no = $1 AND NOT is_deleted",
        )
        .bind(member_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find member by number", e)
        })
    }

    /// Find a live member by login identifier.
    pub async fn find_live_by_member_id(&self, member_id: &str) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE member_id = $1 AND NOT is_deleted",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find member by identifier", e)
        })
    }

    /// Insert a new member.
    ///
    /// The partial unique index on live `member_id` values turns a
    /// duplicate registration into `AlreadyExists`; a soft-deleted row
    /// with the same identifier does not block the insert.
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (member_id, password_hash, member_name, member_email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.member_id)
        .bind(&data.password_hash)
        .bind(&data.member_name)
        .bind(&data.member_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("uidx_members_member_id_live") =>
            {
                AppError::already_exists(format!(
                    "Member identifier '{}' is already in use",
                    data.member_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create member", e),
        })
    }

    /// Apply a partial update to a live member row.
    ///
    /// Absent fields are left untouched; only supplied columns change.
    pub async fn update(&self, member_no: i64, data: &UpdateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET password_hash = COALESCE($2, password_hash), \
                                member_name = COALESCE($3, member_name), \
                                member_email = COALESCE($4, member_email), \
                                updated_at = NOW() \
             WHERE member_no = $1 AND NOT is_deleted \
             RETURNING *",
        )
        .bind(member_no)
        .bind(&data.password_hash)
        .bind(&data.member_name)
        .bind(&data.member_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update member", e))?
        .ok_or_else(|| AppError::not_found(format!("Member {member_no} not found")))
    }

    /// Soft-delete a live member row.
    ///
    /// Flips the flag and stamps the deletion time; every other column is
    /// left as it was. No physical delete is ever issued.
    pub async fn soft_delete(&self, member_no: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE members SET is_deleted = TRUE, deleted_at = NOW() \
             WHERE member_no = $1 AND NOT is_deleted",
        )
        .bind(member_no)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete member", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Member {member_no} not found")));
        }
        Ok(())
    }
}
