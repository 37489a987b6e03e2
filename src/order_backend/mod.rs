//! Order backend: persists composed orders and assigns their identifiers.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
