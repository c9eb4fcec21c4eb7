//! Shared query parameter types for API handlers.

use movies_core::pagination::Page;
use serde::Deserialize;

/// Offset pagination parameters (`?skip=&take=`).
///
/// Defaults and clamping live in [`movies_core::pagination`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.take)
    }
}
