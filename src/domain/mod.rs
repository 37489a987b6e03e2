pub mod customer;
pub mod catalog;
pub mod order;

pub use customer::*;
pub use catalog::*;
pub use order::*;
