//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every mutating call is a
//! single auto-committed statement.

pub mod address_repo;
pub mod cinema_repo;
pub mod movie_repo;

pub use address_repo::AddressRepo;
pub use cinema_repo::CinemaRepo;
pub use movie_repo::MovieRepo;
