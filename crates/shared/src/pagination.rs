//! Page/offset pagination utilities.

use serde::Serialize;

/// Page number used when the request does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A sanitized page request.
///
/// The page number is floored at 1 and a missing or non-positive size falls
/// back to the default. Pages past the end of the result set are not
/// clamped; they simply produce an offset beyond the last row and an empty
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = match size {
            Some(s) if s > 0 => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, size }
    }

    /// Number of rows to skip for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// Number of rows to fetch for this page.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Paging metadata for a result set of `total` matching rows.
    pub fn paging(&self, total: i64) -> Paging {
        Paging {
            current_page: self.page,
            size: self.size,
            total_page: total_pages(total, self.size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Total page count for `total` rows at `size` rows per page.
///
/// An empty result set reports zero pages, not one.
pub fn total_pages(total: i64, size: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + size - 1) / size
    }
}

/// Paging metadata returned alongside list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub current_page: i64,
    pub size: i64,
    pub total_page: i64,
}
