use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: u64 = 10;
pub const PRODUCT_DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;
const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Default, Clone, Deserialize, ToSchema, IntoParams)]
pub struct Pagination {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Returns `(page, limit, offset)` with the page at least 1, the limit
    /// within `1..=100` and the offset capped at `i64::MAX`.
    pub fn normalize(&self, default_limit: u64) -> (u64, u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT);
        let offset = (page - 1).saturating_mul(limit).min(MAX_OFFSET);
        (page, limit, offset)
    }
}

// Page fields are kept inline: numbers do not survive `serde(flatten)` in
// urlencoded query strings.
#[derive(Debug, Default, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductMasterQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Only masters whose category list contains this exact label.
    pub category: Option<String>,
}

impl ProductMasterQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}
