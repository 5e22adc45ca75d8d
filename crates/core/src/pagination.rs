//! Pagination defaults and clamp helpers.
//!
//! List endpoints accept optional `limit`/`offset` query parameters; the
//! repository layer clamps them here so no query can ask for an unbounded
//! page or a negative offset.

/// Default number of rows per list page.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Maximum number of rows per list page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp an optional caller-supplied limit into `[1, max]`, falling back to
/// `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp an optional caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
