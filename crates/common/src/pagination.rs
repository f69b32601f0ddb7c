//! Pagination normalization for list endpoints.
//!
//! Every list endpoint accepts untrusted `page`/`limit` query values and
//! supplies its own defaults. [`PageParams::normalize`] turns them into a
//! safe `(page, limit, offset)` triple: a value is used only if it fully
//! parses as a base-10 integer greater than zero, otherwise that field
//! falls back to its default independently of the other.

/// Hard cap on page size, applied after parsing and fallback.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Per-endpoint pagination defaults.
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
    /// Page number used when the query value is absent or invalid.
    pub page: u64,
    /// Page size used when the query value is absent or invalid.
    pub limit: u64,
}

impl PageDefaults {
    /// Create defaults with page 1 and the given page size.
    #[must_use]
    pub const fn with_limit(limit: u64) -> Self {
        Self { page: 1, limit }
    }
}

/// Normalized pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u64,
    /// Page size, capped at [`MAX_PAGE_SIZE`].
    pub limit: u64,
    /// Rows to skip: `(page - 1) * limit`.
    pub offset: u64,
}

impl PageParams {
    /// Normalize raw query values against per-endpoint defaults.
    #[must_use]
    pub fn normalize(page: Option<&str>, limit: Option<&str>, defaults: PageDefaults) -> Self {
        let page = parse_positive(page, defaults.page);
        let limit = parse_positive(limit, defaults.limit).min(MAX_PAGE_SIZE);

        Self {
            page,
            limit,
            offset: (page - 1) * limit,
        }
    }
}

fn parse_positive(value: Option<&str>, fallback: u64) -> u64 {
    match value {
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => fallback,
        },
        None => fallback,
    }
}
