//! Board (bulletin board definition) domain entities.

pub mod kind;
pub mod model;

pub use kind::{BoardAccess, BoardType};
pub use model::BoardInfo;
