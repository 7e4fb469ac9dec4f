//! Page-number pagination for list endpoints.
//!
//! Lists return a [`PagedResult`] envelope: the page of records plus the page
//! and item bookkeeping a client needs to render pagination controls.

use serde::Serialize;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 100;

/// Default page when `page` is omitted.
pub const DEFAULT_PAGE: i64 = 1;

/// Clamp a user-provided page size to `[1, MAX_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a user-provided page number to `>= 1`.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// SQL `OFFSET` for a (clamped) page and limit. Saturates at `i64::MAX`.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pages {
    pub current: i64,
    pub prev: i64,
    pub has_prev: bool,
    pub next: i64,
    pub has_next: bool,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Items {
    pub limit: i64,
    pub begin: i64,
    pub end: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T: Serialize> {
    pub data: Vec<T>,
    pub pages: Pages,
    pub items: Items,
}

impl<T: Serialize> PagedResult<T> {
    /// Wrap one page of `data` given the clamped `page`/`limit` used to fetch
    /// it and the `total` number of matching records.
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = (total + limit - 1) / limit;
        let next = page.saturating_add(1);
        let prev = page - 1;

        let pages = Pages {
            current: page,
            prev,
            has_prev: prev != 0,
            next,
            has_next: next <= total_pages,
            total: total_pages,
        };

        let items = Items {
            limit,
            begin: offset_for(page, limit).saturating_add(1).min(total),
            end: page.saturating_mul(limit).min(total),
            total,
        };

        Self { data, pages, items }
    }
}
