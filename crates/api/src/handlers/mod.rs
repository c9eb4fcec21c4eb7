//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete, and `patch` for movies) for a single resource. Handlers
//! delegate to the corresponding repository in `movies_db`, project rows
//! through `movies_db::mapping`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod address;
pub mod cinema;
pub mod movie;
