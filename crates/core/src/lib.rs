//! Domain building blocks shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
