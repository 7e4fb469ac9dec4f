//! Query parameter types for list endpoints.

use keystone_core::paging::{clamp_limit, clamp_page};
use keystone_core::sorting::DEFAULT_SORT;
use serde::Deserialize;

/// `?sort=&limit=&page=` for `GET /api/admins`.
///
/// Values are clamped with [`clamp_limit`] / [`clamp_page`] before use.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl ListParams {
    pub fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or(DEFAULT_SORT)
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit)
    }

    pub fn page(&self) -> i64 {
        clamp_page(self.page)
    }
}
