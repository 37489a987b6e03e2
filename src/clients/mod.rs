//! Typed handles to the remote services, safe to clone and share across tasks.

#[macro_use]
mod macros;

pub mod catalog_client;
pub mod order_backend_client;

pub use catalog_client::*;
pub use order_backend_client::*;
