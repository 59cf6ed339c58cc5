//! # board-api
//!
//! HTTP API layer for Maru Board built on Axum.
//!
//! Provides the REST endpoints, DTOs with validation, the Bearer-token
//! extractors, and the mapping from domain errors to HTTP statuses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
