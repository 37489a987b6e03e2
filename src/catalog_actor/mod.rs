//! Catalog service: stores published products and serves them page by page.

pub mod entity;
pub mod error;

pub use error::*;
