//! # board-entity
//!
//! Domain entity models for Maru Board. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Every table carries the soft-delete convention: an `is_deleted` flag
//! plus `deleted_at`, and `created_at`/`updated_at` audit timestamps.
//! Rows are never physically removed.

pub mod attachment;
pub mod board;
pub mod comment;
pub mod member;
pub mod post;
