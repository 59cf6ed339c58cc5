//! HTTP handlers grouped by domain.

pub mod auth;
pub mod board;
pub mod health;
pub mod member;
