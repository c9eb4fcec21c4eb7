//! Projections between entities and transfer objects.
//!
//! Every copy rule is a plain function or `From` impl, so adding a field to
//! an entity or DTO without mapping it is a compile error rather than a
//! silently dropped value.
//!
//! | Direction            | Form                               |
//! |----------------------|------------------------------------|
//! | Create DTO → entity  | `From<CreateX> for X` (`id` = 0)   |
//! | entity → Read DTO    | `From<&X> for ReadX`               |
//! | Update DTO → entity  | `UpdateX::apply_to(&self, &mut X)` |
//! | entity → Update DTO  | `From<&Movie> for UpdateMovie`     |

pub mod address;
pub mod cinema;
pub mod movie;
