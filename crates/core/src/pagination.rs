//! Offset pagination for list endpoints (`?skip=&take=`).

/// Items skipped when the caller omits `skip`.
pub const DEFAULT_SKIP: i64 = 0;

/// Items returned when the caller omits `take`.
pub const DEFAULT_TAKE: i64 = 10;

/// Upper bound on `take`; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A resolved page window, always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub take: i64,
}

impl Page {
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        Self {
            skip: clamp_skip(skip),
            take: clamp_take(take),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Clamp a user-provided `skip` to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(DEFAULT_SKIP).max(0)
}

/// Clamp a user-provided `take` into `[0, MAX_PAGE_SIZE]`.
pub fn clamp_take(take: Option<i64>) -> i64 {
    take.unwrap_or(DEFAULT_TAKE).clamp(0, MAX_PAGE_SIZE)
}
