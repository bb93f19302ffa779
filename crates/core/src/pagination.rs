//! `skip` / `limit` handling for list endpoints.

use serde::Deserialize;

/// Number of rows returned when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound on a single page.
pub const MAX_LIMIT: i64 = 1000;

/// Query parameters accepted by every list endpoint (`?skip=&limit=`).
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Resolve to a `(offset, limit)` pair suitable for binding into SQL.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_offset(self.skip),
            clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT),
        )
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
