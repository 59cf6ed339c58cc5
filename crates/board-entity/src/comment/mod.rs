//! Post comment domain entities.

pub mod model;

pub use model::Comment;
